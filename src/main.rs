use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use tracing::info;

use lineup::{render_compact, render_full, with_line_breaks, GridConfig, Lineup, PreferenceMap};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Full,
    ParseOnly,
    RenderOnly,
}

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = env::args().collect();
    let mut dirs: &[String] = &args[1..];

    let mut mode = Mode::Full;
    match dirs.first().map(String::as_str) {
        Some("--parse-only") => {
            mode = Mode::ParseOnly;
            dirs = &dirs[1..];
        }
        Some("--render-only") => {
            mode = Mode::RenderOnly;
            dirs = &dirs[1..];
        }
        _ => {}
    }

    if dirs.is_empty() {
        eprintln!("Usage: lineup <year-dir> [year-dir...]");
        eprintln!("       lineup --parse-only <year-dir> [year-dir...]");
        eprintln!("       lineup --render-only <year-dir> [year-dir...]");
        process::exit(1);
    }

    for dir in dirs {
        if let Err(e) = process_dir(Path::new(dir), mode) {
            eprintln!("Error processing '{}': {}", dir, e);
            process::exit(1);
        }
    }
}

/// Run the pipeline for one year directory: lineup.txt -> lineup.json ->
/// lineup.html + lineup_compact.html.
fn process_dir(dir: &Path, mode: Mode) -> Result<(), Box<dyn Error>> {
    let days = if mode == Mode::RenderOnly {
        load_lineup(dir)?
    } else {
        parse_and_dump(dir)?
    };

    if mode == Mode::ParseOnly {
        return Ok(());
    }

    let prefs = load_prefs(dir)?;
    let label = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("lineup");
    let config = GridConfig::default();

    save(
        &dir.join("lineup.html"),
        &render_full(&days, &prefs, &config, label)?,
    )?;
    save(
        &dir.join("lineup_compact.html"),
        &render_compact(&days, &prefs, &config, label)?,
    )?;
    Ok(())
}

fn parse_and_dump(dir: &Path) -> Result<Lineup, Box<dyn Error>> {
    let source_path = dir.join("lineup.txt");
    info!("Reading {}...", source_path.display());
    let source = fs::read_to_string(&source_path)?;

    let parsed = lineup::parse(&source)?;

    let json_path = dir.join("lineup.json");
    info!("Writing {}...", json_path.display());
    fs::write(&json_path, serde_json::to_string_pretty(&parsed.lineup)?)?;

    info!(
        "Found {} days, {} acts",
        parsed.lineup.len(),
        parsed.act_count
    );
    Ok(parsed.lineup)
}

fn load_lineup(dir: &Path) -> Result<Lineup, Box<dyn Error>> {
    let path = dir.join("lineup.json");
    info!("Reading {}...", path.display());
    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}

/// Missing prefs.json is not an error, just an empty map.
fn load_prefs(dir: &Path) -> Result<PreferenceMap, Box<dyn Error>> {
    let path = dir.join("prefs.json");
    if !path.exists() {
        return Ok(PreferenceMap::new());
    }
    info!("Reading {}...", path.display());
    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}

fn save(path: &Path, html: &str) -> Result<(), std::io::Error> {
    info!("Writing {}...", path.display());
    fs::write(path, with_line_breaks(html))
}
