// src/util/text.rs

/// Fit text into a single table cell.
///
/// This function:
/// 1. Collapses all whitespace runs (including newlines) into single spaces
/// 2. Cuts the result to `max_chars` characters, ending in `…` when cut
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use prompt_admin::util::text::truncate_cell;
///
/// assert_eq!(truncate_cell("What is\na Tree?", 20), "What is a Tree?");
/// assert_eq!(truncate_cell("abcdefgh", 5), "abcd…");
/// ```
pub fn truncate_cell(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = collapsed.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}

/// Number of characters the text occupies once printed.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}
