pub mod error;
pub mod grid;
pub mod html;
pub mod model;
pub mod parser;

pub use error::*;
pub use grid::GridConfig;
pub use html::{render_compact, render_full, with_line_breaks};
pub use model::*;
pub use parser::{parse, parse_with_config, ParsedLineup, ParserConfig, StageMatch};

/// Both rendered timetable documents plus the schedule they came from.
pub struct Timetables {
    pub lineup: Lineup,
    pub act_count: usize,
    pub full_html: String,
    pub compact_html: String,
}

/// Parse lineup source text and render both timetable layouts.
/// This is the main entry point for the library.
pub fn build(
    source: &str,
    prefs: &PreferenceMap,
    config: &GridConfig,
    label: &str,
) -> Result<Timetables, LineupError> {
    let parsed = parse(source)?;
    let full_html = render_full(&parsed.lineup, prefs, config, label)?;
    let compact_html = render_compact(&parsed.lineup, prefs, config, label)?;
    Ok(Timetables {
        lineup: parsed.lineup,
        act_count: parsed.act_count,
        full_html,
        compact_html,
    })
}
