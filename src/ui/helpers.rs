//! Shared rendering utilities.
//!
//! Components render into a `String` frame rather than stdout so a whole frame
//! is written in one go and can be inspected in tests.
//!
//! Ranges are char indices, not byte indices.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Writes `text` centered in `cols` columns and pads the rest of the line.
pub fn centered(out: &mut String, text: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;
    let visible: String = text.chars().take(len).collect();

    out.push_str(&" ".repeat(padding));
    out.push_str(&visible);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Writes text with highlighted char ranges for search matches.
///
/// `base` is the escape sequence restored after each highlight. Highlighting is
/// skipped on the cursor row so the cursor colors stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
    is_cursor: bool,
) {
    if ranges.is_empty() || is_cursor {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_cursor_appends_escape() {
        let mut out = String::from("x");
        position_cursor(&mut out, 3, 7);
        assert_eq!(out, "x\u{1b}[3;7H");
    }

    #[test]
    fn centered_pads_both_sides() {
        let mut out = String::new();
        centered(&mut out, "ab", 6);
        assert_eq!(out, "  ab  ");
    }

    #[test]
    fn centered_truncates_to_width() {
        let mut out = String::new();
        centered(&mut out, "abcdef", 3);
        assert_eq!(out, "abc");
    }

    #[test]
    fn highlight_wraps_only_matched_chars() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Banana", &[(1, 3)], &theme, "", false);

        let highlight = format!(
            "{}{}an{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        assert_eq!(out, format!("B{highlight}ana"));
    }

    #[test]
    fn cursor_row_is_not_highlighted() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Banana", &[(1, 3)], &theme, "", true);
        assert_eq!(out, "Banana");
    }
}
