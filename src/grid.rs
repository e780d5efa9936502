//! Time-grid layout math shared by both HTML layouts.
//!
//! Clock times map linearly onto pixels: an act spanning
//! `time_from..time_to` becomes an offset from the grid's earliest
//! displayed hour plus a proportional size, horizontal in the full layout
//! and vertical in the compact one. Times outside the displayed window
//! produce negative or out-of-bounds offsets and are passed through
//! unclamped.

use crate::error::LineupError;
use crate::model::{Act, PreferenceMap};

/// Pixels shaved off every block so adjacent borders do not overlap.
const BORDER_COMPENSATION: f64 = 2.0;

/// Layout configuration for the timetable grids.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Earliest displayed hour.
    pub hour_min: u32,
    /// Hour the ruler runs up to.
    pub hour_max: u32,
    /// Pixel width of one hour in the full layout.
    pub hour_width: f64,
    /// Pixel height of one hour in the compact layout.
    pub hour_height: f64,
    /// Stages rendered as columns in the compact layout, in order.
    pub compact_stages: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hour_min: 10,
            hour_max: 24,
            hour_width: 50.0,
            hour_height: 75.0,
            compact_stages: vec!["COMMON STAGE".to_string(), "CASTLE STAGE".to_string()],
        }
    }
}

impl GridConfig {
    /// Total grid width of one day in the full layout.
    pub fn day_width(&self) -> f64 {
        f64::from(self.hour_max - self.hour_min) * self.hour_width
    }

    /// Total grid height of one day in the compact layout.
    pub fn day_height(&self) -> f64 {
        f64::from(self.hour_max - self.hour_min) * self.hour_height
    }

    /// Pixel geometry of a time span at `px_per_hour` scale.
    pub fn span(
        &self,
        time_from: &str,
        time_to: &str,
        px_per_hour: f64,
    ) -> Result<Span, LineupError> {
        let from = minutes(time_from)?;
        let to = minutes(time_to)?;
        let px_per_minute = px_per_hour / 60.0;
        Ok(Span {
            offset: (from - i64::from(self.hour_min) * 60) as f64 * px_per_minute,
            size: (to - from) as f64 * px_per_minute - BORDER_COMPENSATION,
        })
    }
}

/// Proportional pixel geometry of one block: offset from the grid start
/// (left edge in the full layout, top edge in the compact one) and size
/// along the same axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub offset: f64,
    pub size: f64,
}

/// Minute-of-day value of an "HH:MM" clock string.
pub fn minutes(t: &str) -> Result<i64, LineupError> {
    let bad = || LineupError::TimeFormat {
        value: t.to_string(),
    };
    let (h, m) = t.split_once(':').ok_or_else(bad)?;
    let h: i64 = h.parse().map_err(|_| bad())?;
    let m: i64 = m.parse().map_err(|_| bad())?;
    Ok(h * 60 + m)
}

/// Zero-padded "HH:MM" clock string.
pub fn clock(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Inline style highlighting an act somebody rated, if anybody did.
///
/// The intensity is the best score across all people with an entry for the
/// act's artist (exact, case-sensitive match), on a 0-5 scale. Scores
/// above 5 yield an alpha above 1.0 and are passed through as-is.
pub fn highlight_style(act: &Act, prefs: &PreferenceMap) -> Option<String> {
    let best = prefs
        .values()
        .filter_map(|scores| scores.get(&act.artist))
        .max()?;
    Some(format!(
        "background-color: rgba(255, 0, 255, {});",
        *best as f64 / 5.0
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn act(artist: &str) -> Act {
        Act {
            artist: artist.to_string(),
            time_from: "14:00".to_string(),
            time_to: "15:00".to_string(),
        }
    }

    fn prefs(entries: &[(&str, &str, i64)]) -> PreferenceMap {
        let mut map = PreferenceMap::new();
        for (person, artist, score) in entries {
            map.entry(person.to_string())
                .or_insert_with(HashMap::new)
                .insert(artist.to_string(), *score);
        }
        map
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes("10:00").unwrap(), 600);
        assert_eq!(minutes("14:30").unwrap(), 870);
        assert_eq!(minutes("24:15").unwrap(), 1455);
    }

    #[test]
    fn test_minutes_rejects_strings_without_separator() {
        assert!(matches!(
            minutes("1400"),
            Err(LineupError::TimeFormat { .. })
        ));
        assert!(matches!(
            minutes("2pm:00"),
            Err(LineupError::TimeFormat { .. })
        ));
    }

    #[test]
    fn test_full_layout_span_geometry() {
        let config = GridConfig::default();
        let span = config.span("14:00", "15:00", config.hour_width).unwrap();
        // (14*60 - 10*60) minutes at 50px/h, minus the 2px border.
        assert!((span.offset - 200.0).abs() < 1e-9);
        assert!((span.size - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_compact_layout_span_geometry() {
        let config = GridConfig::default();
        let span = config.span("10:00", "10:30", config.hour_height).unwrap();
        assert!((span.offset - 0.0).abs() < 1e-9);
        assert!((span.size - 35.5).abs() < 1e-9);
    }

    #[test]
    fn test_times_before_the_window_are_not_clamped() {
        let config = GridConfig::default();
        let span = config.span("09:00", "10:00", config.hour_width).unwrap();
        assert!(span.offset < 0.0);
        assert!((span.offset + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_extents() {
        let config = GridConfig::default();
        assert!((config.day_width() - 700.0).abs() < 1e-9);
        assert!((config.day_height() - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_is_zero_padded() {
        assert_eq!(clock(9, 5), "09:05");
        assert_eq!(clock(23, 0), "23:00");
    }

    #[test]
    fn test_highlight_uses_best_score_across_people() {
        let prefs = prefs(&[("Alice", "X", 5), ("Bob", "X", 2)]);
        let style = highlight_style(&act("X"), &prefs).unwrap();
        assert_eq!(style, "background-color: rgba(255, 0, 255, 1);");
    }

    #[test]
    fn test_highlight_partial_score() {
        let prefs = prefs(&[("Alice", "X", 3)]);
        let style = highlight_style(&act("X"), &prefs).unwrap();
        assert_eq!(style, "background-color: rgba(255, 0, 255, 0.6);");
    }

    #[test]
    fn test_no_highlight_without_an_entry() {
        let prefs = prefs(&[("Alice", "X", 5)]);
        assert_eq!(highlight_style(&act("Y"), &prefs), None);
        assert_eq!(highlight_style(&act("x"), &prefs), None);
    }

    #[test]
    fn test_scores_above_five_are_not_clamped() {
        let prefs = prefs(&[("Alice", "X", 6)]);
        let style = highlight_style(&act("X"), &prefs).unwrap();
        assert_eq!(style, "background-color: rgba(255, 0, 255, 1.2);");
    }
}
