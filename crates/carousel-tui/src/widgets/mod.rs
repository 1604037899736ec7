mod controls;
mod pager;
mod status_bar;
mod track;

pub use controls::ControlsWidget;
pub use pager::PagerWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `width` display columns, marking the cut with an ellipsis
pub(crate) fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Aurora", 10), "Aurora");
        assert_eq!(fit("Aurora", 4), "Aur…");
        assert_eq!(fit("Aurora", 0), "");
        // wide glyphs count double
        assert_eq!(fit("極光の設計", 5), "極光…");
    }
}
