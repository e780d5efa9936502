//! Static HTML timetable rendering.
//!
//! Both layouts are assembled from small fragment builders (a block, a
//! ruler, a stage row or column) concatenated into one document string.
//! All geometry comes from [`crate::grid`]; all text interpolations go
//! through [`escape_html`].

use crate::error::LineupError;
use crate::grid::{clock, highlight_style, GridConfig, Span};
use crate::model::{Lineup, PreferenceMap, Stage};

/// Render the full layout: one table per day, one row per stage, act
/// blocks positioned left-to-right by time.
pub fn render_full(
    lineup: &Lineup,
    prefs: &PreferenceMap,
    config: &GridConfig,
    label: &str,
) -> Result<String, LineupError> {
    let mut html = document_head(label, "lineup_compact.html", "Compact Lineup");

    for day in lineup {
        html.push_str(&format!("<h1>{}</h1>", escape_html(&day.name)));
        html.push_str("<table border=\"1\"><thead><tr><td>Stage</td>");
        html.push_str(&format!(
            "<td style=\"position: relative; height: 22px; min-width: {}px;\">",
            config.day_width()
        ));
        html.push_str(&hour_ruler_row(config)?);
        html.push_str("</td></tr></thead><tbody>");

        for stage in &day.stages {
            html.push_str(&stage_row(stage, prefs, config)?);
        }

        html.push_str("</tbody></table>");
    }

    html.push_str("</body></html>");
    Ok(html)
}

/// Render the compact layout: one shared table, a time column plus one
/// column per configured stage, act blocks stacked top-to-bottom by time.
/// A day missing a configured stage gets an empty placeholder cell.
pub fn render_compact(
    lineup: &Lineup,
    prefs: &PreferenceMap,
    config: &GridConfig,
    label: &str,
) -> Result<String, LineupError> {
    let mut html = document_head(label, "lineup.html", "Full Lineup");

    html.push_str("<table border=\"1\" style=\"width: 100%;\"><thead><tr><th>Time</th>");
    for stage_name in &config.compact_stages {
        html.push_str(&format!("<th>{}</th>", escape_html(stage_name)));
    }
    html.push_str("</tr></thead><tbody>");

    for day in lineup {
        html.push_str(&format!(
            "<tr><td colspan=\"{}\" style=\"font-size: 2em; font-weight: bold; text-align:center;\">{}</td></tr>",
            config.compact_stages.len() + 1,
            escape_html(&day.name)
        ));

        html.push_str("<tr>");
        html.push_str(&format!(
            "<td style=\"position: relative; height: {}px;\">",
            config.day_height()
        ));
        html.push_str(&hour_ruler_column(config)?);
        html.push_str("</td>");

        for stage_name in &config.compact_stages {
            match day.stages.iter().find(|stage| &stage.name == stage_name) {
                Some(stage) => html.push_str(&stage_column(stage, prefs, config)?),
                None => html.push_str("<td>&nbsp;</td>"),
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></body></html>");
    Ok(html)
}

/// Insert a line break between adjacent tags so the saved document is
/// readable in a text editor.
pub fn with_line_breaks(html: &str) -> String {
    html.replace("><", ">\n<")
}

/// Document preamble shared by both layouts: title plus navigation back to
/// the index and across to the sibling layout.
fn document_head(label: &str, sibling_href: &str, sibling_text: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<html><head><title>{}</title></head><body>",
        escape_html(label)
    ));
    html.push_str("<a href=\"../\">&lt;-- Index</a>&nbsp;&nbsp;&nbsp;&nbsp;");
    html.push_str(&format!(
        "<a href=\"{sibling_href}\">{sibling_text}</a>"
    ));
    html
}

/// One absolutely-positioned block in the full (horizontal) layout; the
/// text doubles as the hover title. `text` must already be escaped.
fn time_block(span: &Span, text: &str, style: Option<&str>) -> String {
    format!(
        "<div style=\"position: absolute; top: 0px; left: {}px; width: {}px; height: 20px; border: 1px solid black; overflow: hidden; {}\" title=\"{}\">{}</div>",
        span.offset,
        span.size,
        style.unwrap_or(""),
        text,
        text
    )
}

/// One absolutely-positioned block in the compact (vertical) layout.
/// `text` and `title` must already be escaped.
fn time_block_compact(span: &Span, text: &str, title: &str, style: Option<&str>) -> String {
    format!(
        "<div style=\"position: absolute; top: {}px; height: {}px; left: 0px; right: 0px; border: 1px solid black; overflow: hidden; white-space: nowrap; {}\" title=\"{}\">{}</div>",
        span.offset,
        span.size,
        style.unwrap_or(""),
        title,
        text
    )
}

/// Hour labels laid out horizontally across the full grid.
fn hour_ruler_row(config: &GridConfig) -> Result<String, LineupError> {
    let mut html = String::new();
    for hour in config.hour_min..config.hour_max {
        let from = clock(hour, 0);
        let to = clock(hour + 1, 0);
        let span = config.span(&from, &to, config.hour_width)?;
        html.push_str(&time_block(&span, &from, None));
    }
    Ok(html)
}

/// Hour labels stacked vertically down the compact grid.
fn hour_ruler_column(config: &GridConfig) -> Result<String, LineupError> {
    let mut html = String::new();
    for hour in config.hour_min..config.hour_max {
        let from = clock(hour, 0);
        let to = clock(hour + 1, 0);
        let span = config.span(&from, &to, config.hour_height)?;
        html.push_str(&time_block_compact(&span, &from, &from, None));
    }
    Ok(html)
}

/// One stage row of the full layout: name label plus positioned acts.
fn stage_row(
    stage: &Stage,
    prefs: &PreferenceMap,
    config: &GridConfig,
) -> Result<String, LineupError> {
    let mut html = String::new();
    html.push_str(&format!(
        "<tr><td style=\"white-space: nowrap;\">{}</td>",
        escape_html(&stage.name)
    ));
    html.push_str("<td style=\"position: relative; height: 22px;\">");
    for act in &stage.acts {
        let span = config.span(&act.time_from, &act.time_to, config.hour_width)?;
        let text = escape_html(&format!(
            "{} ({} - {})",
            act.artist, act.time_from, act.time_to
        ));
        let style = highlight_style(act, prefs);
        html.push_str(&time_block(&span, &text, style.as_deref()));
    }
    html.push_str("</td></tr>");
    Ok(html)
}

/// One stage column of the compact layout: acts stacked by time, the
/// artist and time range split over two lines (newline in the hover
/// title, `<br/>` in the cell).
fn stage_column(
    stage: &Stage,
    prefs: &PreferenceMap,
    config: &GridConfig,
) -> Result<String, LineupError> {
    let mut html = String::new();
    html.push_str(&format!(
        "<td style=\"position: relative; height: {}px;\">",
        config.day_height()
    ));
    for act in &stage.acts {
        let span = config.span(&act.time_from, &act.time_to, config.hour_height)?;
        let artist = escape_html(&act.artist);
        let times = format!("{} - {}", act.time_from, act.time_to);
        let text = format!("{artist}<br/>{times}");
        let title = format!("{artist}\n{times}");
        let style = highlight_style(act, prefs);
        html.push_str(&time_block_compact(&span, &text, &title, style.as_deref()));
    }
    html.push_str("</td>");
    Ok(html)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
