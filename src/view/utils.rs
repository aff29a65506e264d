//! Utility functions for rendering UI components

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` display columns, ending in "..." when
/// shortened and there is room for it.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_columns(s, max_width);
    }
    format!("{}...", take_columns(s, max_width - 3))
}

fn take_columns(s: &str, columns: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= columns
        })
        .collect()
}

/// Break `s` into lines no wider than `width` columns without dropping any
/// text. Existing line breaks are kept, words move to the next line when they
/// don't fit and words wider than a whole line are split.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in s.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_width + w > width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += w;
                }
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a very long title", 10), "a very ...");
    }

    #[test]
    fn truncation_never_exceeds_the_limit() {
        assert_eq!(truncate_string("anything", 0), "");
        assert_eq!(truncate_string("anything", 2), "an");
        assert_eq!(truncate_string("anything", 3), "any");
        assert_eq!(truncate_string("anything", 4), "a...");
        for width in 0..12 {
            assert!(truncate_string("日本語のタイトル", width).width() <= width);
        }
    }

    #[test]
    fn wrapping_keeps_every_word() {
        let text = "In this episode we discuss strategy with a guest END-MARKER";
        let lines = wrap_text(text, 12);
        assert!(lines.iter().all(|l| l.width() <= 12));
        assert_eq!(lines.join(" "), text);
        assert_eq!(lines.last().map(String::as_str), Some("END-MARKER"));
    }

    #[test]
    fn wrapping_splits_long_words_and_keeps_line_breaks() {
        assert_eq!(
            wrap_text("https://cdn.example/ep.mp3", 10),
            vec!["https://cd", "n.example/", "ep.mp3"]
        );
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
        assert_eq!(wrap_text("", 20), vec![""]);
        assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(area, 100, 30), area);
    }
}
