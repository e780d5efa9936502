//! Lineup text parser.
//!
//! Turns the loosely-structured tab-delimited lineup text into a
//! [`Lineup`] tree with a single left-to-right scan. Each non-blank line
//! is classified, in precedence order, as a header, a day, a stage, an
//! act, or unrecognized. The day/stage cursor is simply the tail of the
//! tree built so far, so the scan never holds dangling references.

use tracing::warn;

use crate::error::LineupError;
use crate::model::{Act, Day, Lineup, Stage};

/// Column header cell carried over from the spreadsheet export.
const HEADER_TOKEN: &str = "Times";
const HEADER_SUFFIX: &str = "\tTimes";

/// Venue-type suffixes recognized by [`StageMatch::Suffix`].
const STAGE_SUFFIXES: [&str; 6] = [" STAGE", " TENT", " BAR", " LOUNGE", " CIRCUS", " ARENA"];

/// How stage-name lines are recognized in the source text.
///
/// Different years of the schedule follow different conventions, so the
/// heuristic is selectable rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageMatch {
    /// The whole line is uppercase letters, spaces, `&` or `’`.
    #[default]
    Uppercase,
    /// The line ends with a known venue-type suffix.
    Suffix,
}

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub stage_match: StageMatch,
}

/// Parser output: the schedule tree plus a diagnostic act count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLineup {
    pub lineup: Lineup,
    pub act_count: usize,
}

/// Parse lineup source text with the default configuration.
pub fn parse(source: &str) -> Result<ParsedLineup, LineupError> {
    parse_with_config(source, &ParserConfig::default())
}

/// Parse lineup source text.
///
/// Unrecognized lines are logged and skipped. An act line whose time range
/// has no dash is a fatal [`LineupError::FormatError`]; a stage or act
/// line appearing before its parent day or stage is a fatal
/// [`LineupError::StructureError`].
pub fn parse_with_config(
    source: &str,
    config: &ParserConfig,
) -> Result<ParsedLineup, LineupError> {
    let mut days: Lineup = Vec::new();
    let mut act_count = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let line_no = index + 1;

        if line.is_empty() {
            continue;
        }

        if line == HEADER_TOKEN || line.ends_with(HEADER_SUFFIX) {
            continue;
        }

        if line.ends_with("day") {
            days.push(Day {
                name: line.to_string(),
                stages: Vec::new(),
            });
            continue;
        }

        if is_stage_line(line, config) {
            let day = days.last_mut().ok_or_else(|| LineupError::StructureError {
                line: line_no,
                message: format!("stage \"{line}\" appears before any day"),
            })?;
            day.stages.push(Stage {
                acts: Vec::new(),
                name: line.to_string(),
            });
            continue;
        }

        if let Some((artist, times)) = line.split_once('\t') {
            // En-dashes sneak in when the lineup is pasted from a web page.
            let times = times.replace('–', "-");
            let (from, to) = times.split_once('-').ok_or_else(|| LineupError::FormatError {
                line: line_no,
                message: format!("expected time range \"{}\" to contain a dash", times.trim()),
            })?;
            let stage = days
                .last_mut()
                .and_then(|day| day.stages.last_mut())
                .ok_or_else(|| LineupError::StructureError {
                    line: line_no,
                    message: format!("act \"{}\" appears before any stage", artist.trim()),
                })?;
            stage.acts.push(Act {
                artist: artist.trim().to_string(),
                time_from: normalize_time(from),
                time_to: normalize_time(to),
            });
            act_count += 1;
            continue;
        }

        warn!("Unknown line format (line {line_no}): {line}");
    }

    Ok(ParsedLineup {
        lineup: days,
        act_count,
    })
}

/// Normalize a clock-time endpoint: trim and accept `.` as the hour/minute
/// separator ("14.30" -> "14:30").
pub fn normalize_time(t: &str) -> String {
    t.trim().replace('.', ":")
}

/// Stage-name line predicate for the configured strategy.
pub fn is_stage_line(line: &str, config: &ParserConfig) -> bool {
    match config.stage_match {
        StageMatch::Uppercase => {
            !line.is_empty()
                && line
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == ' ' || c == '&' || c == '’')
        }
        StageMatch::Suffix => STAGE_SUFFIXES.iter().any(|suffix| line.ends_with(suffix)),
    }
}
