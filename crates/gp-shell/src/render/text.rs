/// Collapses line breaks and runs of whitespace into single spaces.
pub(crate) fn flatten(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `value` to at most `width` characters, marking the cut with `...`.
pub(crate) fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }
    let mut cut: String = value.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Left-aligned cell of exactly `width` characters.
pub(crate) fn cell(value: &str, width: usize) -> String {
    let value = truncate(&flatten(value), width);
    let padding = width.saturating_sub(value.chars().count());
    format!("{}{}", value, " ".repeat(padding))
}

/// Formats a count with `,` thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_joins_lines() {
        assert_eq!(
            flatten("Georges Seurat\nFrench,  1859-1891"),
            "Georges Seurat French, 1859-1891"
        );
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_cell_pads_to_width() {
        assert_eq!(cell("ab", 4), "ab  ");
        assert_eq!(cell("café au lait", 6), "caf...");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(128_194), "128,194");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
