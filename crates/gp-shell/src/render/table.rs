use gp_app::{PageViewSnapshot, ViewStatus};
use gp_core::Artwork;

use super::text::{cell, format_count};

const TITLE_WIDTH: usize = 36;
const ORIGIN_WIDTH: usize = 16;
const ARTIST_WIDTH: usize = 32;
const INSCRIPTIONS_WIDTH: usize = 20;
const YEAR_WIDTH: usize = 6;
const ID_WIDTH: usize = 8;

const PLACEHOLDER: &str = "-";

fn optional(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => PLACEHOLDER,
    }
}

fn year(value: Option<i64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |year| year.to_string())
}

fn title(artwork: &Artwork) -> &str {
    if artwork.title.trim().is_empty() {
        "Untitled"
    } else {
        &artwork.title
    }
}

fn header() -> String {
    format!(
        "    {} {} {} {} {} {} {}",
        cell("ID", ID_WIDTH),
        cell("Title", TITLE_WIDTH),
        cell("Origin", ORIGIN_WIDTH),
        cell("Artist", ARTIST_WIDTH),
        cell("Inscriptions", INSCRIPTIONS_WIDTH),
        cell("Start", YEAR_WIDTH),
        cell("End", YEAR_WIDTH),
    )
}

fn row(artwork: &Artwork, checked: bool) -> String {
    format!(
        "[{}] {} {} {} {} {} {} {}",
        if checked { "x" } else { " " },
        cell(&artwork.id.to_string(), ID_WIDTH),
        cell(title(artwork), TITLE_WIDTH),
        cell(optional(&artwork.place_of_origin), ORIGIN_WIDTH),
        cell(optional(&artwork.artist_display), ARTIST_WIDTH),
        cell(optional(&artwork.inscriptions), INSCRIPTIONS_WIDTH),
        cell(&year(artwork.date_start), YEAR_WIDTH),
        cell(&year(artwork.date_end), YEAR_WIDTH),
    )
}

/// One-line banner for the error status, or `None` when there is no error.
pub fn render_error_banner(snapshot: &PageViewSnapshot) -> Option<String> {
    let ViewStatus::Error(err) = &snapshot.status else {
        return None;
    };
    let mut banner = format!("! Failed to load page ({}).", err);
    if snapshot.page.is_some() {
        banner.push_str(" Showing the previous page.");
    }
    banner.push_str(" Try `reload` or `page N`.");
    Some(banner)
}

/// Renders the page status line and the table of rows.
pub fn render_page(snapshot: &PageViewSnapshot) -> String {
    let mut lines = Vec::new();

    if let Some(banner) = render_error_banner(snapshot) {
        lines.push(banner);
    }

    let Some(page) = snapshot.page else {
        if let ViewStatus::Loading { page_number } = snapshot.status {
            lines.push(format!("Loading page {}...", page_number));
        } else {
            lines.push("No page loaded.".to_string());
        }
        return lines.join("\n");
    };

    let first_row = page.offset() + 1;
    let last_row = page.offset() + snapshot.rows.len() as u64;
    let range = if snapshot.rows.is_empty() {
        "no rows".to_string()
    } else {
        format!("rows {}-{}", format_count(first_row), format_count(last_row))
    };
    lines.push(format!(
        "Page {} of {} | {} of {} records | {} selected",
        format_count(u64::from(page.page_number)),
        format_count(page.total_pages().max(1)),
        range,
        format_count(page.total_records),
        snapshot.selected_total,
    ));
    lines.push(header());
    for artwork in &snapshot.rows {
        lines.push(row(artwork, snapshot.is_selected(artwork.id)));
    }

    lines.join("\n")
}
