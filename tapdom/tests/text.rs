use tapdom::text::{
    align_offset, char_width, columns_for_width, display_width, truncate_to_width, GLYPH_WIDTH,
};
use tapdom::TextAlign;

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("Medium"), 6);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 columns wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("选项"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('語'), 2);
}

#[test]
fn test_columns_for_width() {
    assert_eq!(columns_for_width(GLYPH_WIDTH * 10.0), 10);

    // Partial columns are dropped
    assert_eq!(columns_for_width(GLYPH_WIDTH * 3.0 + 1.0), 3);
    assert_eq!(columns_for_width(0.0), 0);
    assert_eq!(columns_for_width(-44.0), 0);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("Click to select", 20), "Click to select");
    assert_eq!(truncate_to_width("Low", 3), "Low");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("Click to select", 8), "Click t…");
    assert_eq!(truncate_to_width("Medium", 4), "Med…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_to_width("Medium", 1), "…");
    assert_eq!(truncate_to_width("Medium", 0), "");
    assert_eq!(truncate_to_width("", 5), "");
}

#[test]
fn test_truncate_cjk_never_splits_a_glyph() {
    // "日本語" is 6 columns; with room for 5 the ellipsis takes one,
    // leaving 4 columns = two full glyphs
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(5, 11, TextAlign::Left), 0);
    assert_eq!(align_offset(5, 11, TextAlign::Center), 3);
    assert_eq!(align_offset(5, 11, TextAlign::Right), 6);
}

#[test]
fn test_align_offset_text_wider_than_available() {
    assert_eq!(align_offset(15, 10, TextAlign::Center), 0);
    assert_eq!(align_offset(15, 10, TextAlign::Right), 0);
}
