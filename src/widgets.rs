// HTML building blocks
//
// Small fragment generators the page is assembled from: metric cards,
// finding boxes, embedded image panels with placeholder fallbacks, download
// links carrying their payload as data URIs, and collapsible raw-report
// sections. Everything returns an HTML string; nothing here touches global
// state.

use crate::artifacts::{ArtifactStore, Warnings};
use crate::content::{BorderFindings, KeyMetric, VendorRow};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Minimal HTML escaping for text interpolated into markup.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One metric card: big value, label above, optional note below.
pub fn metric_card(label: &str, value: &str, note: &str) -> String {
    let note_html = if note.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="muted">{}</div>"#, html_escape(note))
    };
    format!(
        r#"<div class="card metric">
  <div class="muted">{}</div>
  <div class="big">{}</div>
  {}
</div>"#,
        html_escape(label),
        html_escape(value),
        note_html
    )
}

/// A responsive grid of metric cards.
pub fn metric_row(metrics: &[KeyMetric]) -> String {
    let cards = metrics
        .iter()
        .map(|m| metric_card(m.label, m.value, m.note))
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="grid kpis">{cards}</div>"#)
}

/// Highlighted interpretation box (hypothesis assessments, key findings).
///
/// `body_html` is trusted markup built by the renderer, not user input.
pub fn insight_box(title: &str, body_html: &str) -> String {
    format!(
        r#"<div class="insight-box">
  <b>{}</b>
  {body_html}
</div>"#,
        html_escape(title)
    )
}

/// Per-fleet findings card for the border-effect maps.
pub fn border_findings_card(f: &BorderFindings) -> String {
    format!(
        r#"<div class="finding-card">
  <b>{} Findings:</b>
  <ul>
    <li>Avg Change: {:+.1}%</li>
    <li>Zones Analyzed: {}</li>
    <li>Border Zones: {}</li>
    <li>Max Increase: {:+.1}%</li>
    <li>Max Decrease: {:+.1}%</li>
  </ul>
</div>"#,
        html_escape(f.fleet),
        f.avg_change_pct,
        f.zones_analyzed,
        f.border_zones,
        f.max_increase_pct,
        f.max_decrease_pct
    )
}

/// Display an image artifact with title and description.
///
/// The artifact is embedded as a data URI so the page stays self-contained.
/// A missing file renders a "not found" placeholder and an unreadable or
/// undecodable one a "could not load" indicator; in both cases exactly one
/// warning has been raised by the read and the panel still renders.
pub fn image_panel(
    store: &ArtifactStore,
    name: &str,
    title: &str,
    description: &str,
    warnings: &mut Warnings,
) -> String {
    let description_html = if description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="section-desc">{}</p>"#,
            html_escape(description)
        )
    };

    let body = match store.read_image(name, warnings) {
        Some(img) => format!(
            r#"<img src="{}" width="{}" height="{}" alt="{}">"#,
            img.data_uri,
            img.width,
            img.height,
            html_escape(title)
        ),
        None if store.exists(name) => format!(
            r#"<div class="placeholder bad">Could not load: {}</div>"#,
            html_escape(title)
        ),
        None => format!(
            r#"<div class="placeholder">Not found: {}</div>"#,
            html_escape(name)
        ),
    };

    format!(
        r#"<div class="plot">
  <h3>{}</h3>
  {description_html}
  {body}
</div>"#,
        html_escape(title)
    )
}

/// Collapsible section showing a raw report file.
pub fn report_details(title: &str, content: Option<&str>) -> String {
    match content {
        Some(text) => format!(
            r#"<details>
  <summary>{}</summary>
  <pre>{}</pre>
</details>"#,
            html_escape(title),
            html_escape(text)
        ),
        None => format!(
            r#"<p class="placeholder">{} unavailable</p>"#,
            html_escape(title)
        ),
    }
}

/// Download action for a text report, payload embedded as a data URI.
///
/// A missing report renders a disabled entry; the warning was raised when
/// the report was read.
pub fn download_button(file_name: &str, label: &str, content: Option<&str>) -> String {
    match content {
        Some(text) => format!(
            r#"<a class="download" download="{}" href="data:text/plain;charset=utf-8;base64,{}">{}</a>"#,
            html_escape(file_name),
            STANDARD.encode(text.as_bytes()),
            html_escape(label)
        ),
        None => format!(
            r#"<span class="download disabled">{} (not found)</span>"#,
            html_escape(label)
        ),
    }
}

/// Sidebar table of the top suspicious vendors.
pub fn vendor_table(rows: &[VendorRow]) -> String {
    let body = rows
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                html_escape(r.vendor),
                r.ghost_trips,
                r.avg_speed_mph
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");
    format!(
        r#"<table>
    <tr><th>Vendor</th><th>Ghost Trips</th><th>Avg Speed</th></tr>
    {body}
  </table>"#
    )
}

/// Key/value list for the project overview block.
pub fn overview_list(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="label-val"><span>{}</span><span>{}</span></div>"#,
                html_escape(label),
                html_escape(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bordered card with a title and bullet lines (weather/taxi data details).
pub fn info_card(title: &str, lines: &[&str]) -> String {
    let items = lines
        .iter()
        .map(|line| format!("<li>{}</li>", html_escape(line)))
        .collect::<Vec<_>>()
        .join("\n    ");
    format!(
        r#"<div class="finding-card">
  <b>{}</b>
  <ul>
    {items}
  </ul>
</div>"#,
        html_escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn escaping_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<b>"tips & tolls"</b>"#),
            "&lt;b&gt;&quot;tips &amp; tolls&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn metric_card_shows_label_value_and_note() {
        let card = metric_card("Rain Correlation", "0.041", "Weak Positive");
        assert!(card.contains("Rain Correlation"));
        assert!(card.contains("0.041"));
        assert!(card.contains("Weak Positive"));
    }

    #[test]
    fn download_button_embeds_payload() {
        let html = download_button("report.txt", "Rain Tax Analysis", Some("Elasticity: -0.40%\n"));
        assert!(html.contains(r#"download="report.txt""#));
        assert!(html.contains("data:text/plain;charset=utf-8;base64,"));
    }

    #[test]
    fn download_button_for_missing_report_is_disabled() {
        let html = download_button("report.txt", "Rain Tax Analysis", None);
        assert!(html.contains("disabled"));
        assert!(html.contains("not found"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn image_panel_missing_artifact_renders_placeholder_with_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();

        let html = image_panel(&store, "gone.png", "Border Map", "", &mut warnings);
        assert!(html.contains("Not found: gone.png"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn image_panel_undecodable_artifact_says_could_not_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.png"), b"junk bytes").unwrap();
        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();

        let html = image_panel(&store, "bad.png", "Border Map", "", &mut warnings);
        assert!(html.contains("Could not load: Border Map"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn report_details_escapes_content() {
        let html = report_details("Velocity summary", Some("speed < 13 MPH & rising"));
        assert!(html.contains("speed &lt; 13 MPH &amp; rising"));
    }
}
