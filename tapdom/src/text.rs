use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Nominal glyph advance of the built-in font, in points.
///
/// Text layout treats every column as this wide, so a label fits
/// `width / GLYPH_WIDTH` columns of text.
pub const GLYPH_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Number of whole text columns that fit in `width` points.
pub fn columns_for_width(width: f32) -> usize {
    if width <= 0.0 {
        return 0;
    }
    (width / GLYPH_WIDTH) as usize
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}
