use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, appending `…` when
/// anything was cut. Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `byte_offset`, or None at end.
pub fn next_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    s[byte_offset..]
        .grapheme_indices(true)
        .nth(1)
        .map(|(i, _)| byte_offset + i)
        .or(Some(s.len()))
}

/// Byte offset of the grapheme boundary before `byte_offset`, or None at start.
pub fn prev_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .or(Some(0))
}

/// Start of the whitespace-delimited word left of `byte_offset`.
/// Trailing whitespace is skipped first, so repeated calls hop whole words.
pub fn word_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset.min(s.len())]
        .grapheme_indices(true)
        .collect();
    let mut i = graphemes.len();
    while i > 0 && is_blank(graphemes[i - 1].1) {
        i -= 1;
    }
    while i > 0 && !is_blank(graphemes[i - 1].1) {
        i -= 1;
    }
    graphemes.get(i).map_or(0, |(off, _)| *off)
}

/// Start of the next word right of `byte_offset` (end of string if none).
pub fn word_right(s: &str, byte_offset: usize) -> usize {
    if byte_offset >= s.len() {
        return s.len();
    }
    let mut it = s[byte_offset..].grapheme_indices(true).peekable();
    while it.peek().is_some_and(|&(_, g)| !is_blank(g)) {
        it.next();
    }
    while it.peek().is_some_and(|&(_, g)| is_blank(g)) {
        it.next();
    }
    it.peek().map_or(s.len(), |&(i, _)| byte_offset + i)
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("todo"), 4);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_fits_untouched() {
        assert_eq!(truncate_to_width("milk", 10), "milk");
        assert_eq!(truncate_to_width("milk", 4), "milk");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("buy oat milk", 8), "buy oat\u{2026}");
        assert_eq!(truncate_to_width("milk", 0), "");
        assert_eq!(truncate_to_width("milk", 1), "\u{2026}");
    }

    #[test]
    fn truncate_respects_wide_graphemes() {
        // "你好世界" is 8 cells; budget 4 leaves room for 你 (2) + …
        let out = truncate_to_width("你好世界", 4);
        assert_eq!(out, "你\u{2026}");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn boundaries_ascii() {
        assert_eq!(next_boundary("abc", 0), Some(1));
        assert_eq!(next_boundary("abc", 2), Some(3));
        assert_eq!(next_boundary("abc", 3), None);
        assert_eq!(prev_boundary("abc", 3), Some(2));
        assert_eq!(prev_boundary("abc", 0), None);
    }

    #[test]
    fn boundaries_keep_clusters_whole() {
        let s = "a🎉b";
        assert_eq!(next_boundary(s, 1), Some(5));
        assert_eq!(prev_boundary(s, 5), Some(1));

        let s = "cafe\u{0301}!";
        // é is e + combining acute (bytes 3..6)
        assert_eq!(next_boundary(s, 3), Some(6));
        assert_eq!(prev_boundary(s, 6), Some(3));
    }

    #[test]
    fn zwj_sequence_is_one_cluster() {
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(next_boundary(family, 0), Some(family.len()));
    }

    #[test]
    fn word_hops() {
        let s = "buy oat milk";
        assert_eq!(word_left(s, s.len()), 8);
        assert_eq!(word_left(s, 8), 4);
        assert_eq!(word_left(s, 4), 0);
        assert_eq!(word_left(s, 0), 0);
        assert_eq!(word_right(s, 0), 4);
        assert_eq!(word_right(s, 4), 8);
        assert_eq!(word_right(s, 8), s.len());
        assert_eq!(word_right(s, s.len()), s.len());
    }

    #[test]
    fn word_left_skips_trailing_spaces() {
        assert_eq!(word_left("buy   ", 6), 0);
    }
}
