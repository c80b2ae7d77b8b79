use gp_app::SelectionSummary;

use super::text::flatten;

/// Renders the selection summary; an empty selection renders as nothing.
pub fn render_summary(summary: &SelectionSummary) -> String {
    if summary.is_empty() {
        return String::new();
    }

    let mut lines = vec![summary.heading()];
    for item in &summary.items {
        let id = item.id.to_string();
        let title = if item.title.trim().is_empty() {
            "Untitled".to_string()
        } else {
            flatten(&item.title)
        };
        let line = match item.artist_display.as_deref().map(flatten) {
            Some(artist) if !artist.is_empty() => {
                format!("  {:>8}  {} ({})", id, title, artist)
            }
            _ => format!("  {:>8}  {}", id, title),
        };
        lines.push(line);
    }
    lines.push("  `remove ID` drops one entry, `clear` drops all".to_string());
    lines.join("\n")
}
