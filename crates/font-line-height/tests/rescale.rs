//! End-to-end rescaling over minimal in-memory fonts.

use font_line_height::{Error, apply_line_height, read_metrics};
use read_fonts::{FontRef, TableProvider};
use write_fonts::{
    FontBuilder,
    tables::{
        hhea::Hhea,
        os2::{Os2, SelectionFlags},
    },
    types::FWord,
};

/// Build a font containing just the two vertical-metrics tables.
fn build_font(ascender: i16, descender: i16, line_gap: i16, fs_selection: u16) -> Vec<u8> {
    let hhea = Hhea {
        ascender: FWord::new(ascender),
        descender: FWord::new(descender),
        line_gap: FWord::new(line_gap),
        ..Default::default()
    };
    let os2 = Os2 {
        s_typo_ascender: ascender,
        s_typo_descender: descender,
        s_typo_line_gap: line_gap,
        us_win_ascent: ascender.max(0) as u16,
        us_win_descent: (-i32::from(descender)).max(0) as u16,
        fs_selection: SelectionFlags::from_bits_truncate(fs_selection),
        ..Default::default()
    };

    let mut builder = FontBuilder::new();
    builder.add_table(&hhea).unwrap();
    builder.add_table(&os2).unwrap();
    builder.build()
}

#[test]
fn scenario_950_250_at_1_2() {
    let data = build_font(950, -250, 100, 0);
    let rescaled = apply_line_height(&data, 1.2).unwrap();

    assert_eq!(rescaled.expansion.ascent, 1070);
    assert_eq!(rescaled.expansion.descent, 370);
    assert_eq!(rescaled.expansion.target, 1440);

    let font = FontRef::new(&rescaled.data).unwrap();
    let hhea = font.hhea().unwrap();
    assert_eq!(hhea.ascender().to_i16(), 1070);
    assert_eq!(hhea.descender().to_i16(), -370);
    assert_eq!(hhea.line_gap().to_i16(), 0);

    let os2 = font.os2().unwrap();
    assert_eq!(os2.s_typo_ascender(), 1070);
    assert_eq!(os2.s_typo_descender(), -370);
    assert_eq!(os2.s_typo_line_gap(), 0);
    assert_eq!(os2.us_win_ascent(), 1070);
    assert_eq!(os2.us_win_descent(), 370);
}

#[test]
fn line_height_matches_rounded_target() {
    for &(a, d) in &[(950i16, -250i16), (1000, -200), (733, -267)] {
        for &r in &[1.1, 1.2, 1.5, 2.0] {
            let data = build_font(a, d, 90, 0);
            let rescaled = apply_line_height(&data, r).unwrap();

            let original = i32::from(a) - i32::from(d);
            let target = (original as f64 * r).round() as i32;

            let font = FontRef::new(&rescaled.data).unwrap();
            let hhea = font.hhea().unwrap();
            let line_height =
                i32::from(hhea.ascender().to_i16()) - i32::from(hhea.descender().to_i16());
            assert_eq!(line_height, target);
        }
    }
}

#[test]
fn sets_use_typo_metrics_and_preserves_other_bits() {
    let italic_bold = (SelectionFlags::ITALIC | SelectionFlags::BOLD).bits();
    let data = build_font(950, -250, 0, italic_bold);
    let rescaled = apply_line_height(&data, 1.2).unwrap();

    let font = FontRef::new(&rescaled.data).unwrap();
    let flags = font.os2().unwrap().fs_selection();
    assert!(flags.contains(SelectionFlags::USE_TYPO_METRICS));
    assert_eq!(
        flags.bits() & !SelectionFlags::USE_TYPO_METRICS.bits(),
        italic_bold
    );
}

#[test]
fn line_gap_zeroed_even_when_clamped() {
    // Ratio below 1 never shrinks the metrics, but the line gap still goes
    // to zero and the compatibility bit is still set.
    let data = build_font(950, -250, 200, 0);
    let rescaled = apply_line_height(&data, 0.9).unwrap();

    let metrics = read_metrics(&rescaled.data).unwrap();
    assert_eq!(metrics.ascender, 950);
    assert_eq!(metrics.descender, -250);
    assert_eq!(metrics.line_gap, 0);
    assert_eq!(metrics.typo_line_gap, 0);
    assert!(metrics.use_typo_metrics);
}

#[test]
fn input_bytes_are_untouched() {
    let data = build_font(950, -250, 100, 0);
    let before = data.clone();
    let _ = apply_line_height(&data, 1.3).unwrap();
    assert_eq!(data, before);
}

#[test]
fn missing_os2_table_is_a_parse_error() {
    let hhea = Hhea {
        ascender: FWord::new(800),
        descender: FWord::new(-200),
        line_gap: FWord::new(0),
        ..Default::default()
    };
    let mut builder = FontBuilder::new();
    builder.add_table(&hhea).unwrap();
    let data = builder.build();

    assert!(matches!(apply_line_height(&data, 1.2), Err(Error::Parse(_))));
}

#[test]
fn read_metrics_reports_current_values() {
    let data = build_font(900, -300, 50, 0);
    let metrics = read_metrics(&data).unwrap();
    assert_eq!(metrics.ascender, 900);
    assert_eq!(metrics.descender, -300);
    assert_eq!(metrics.line_gap, 50);
    assert_eq!(metrics.win_ascent, 900);
    assert_eq!(metrics.win_descent, 300);
    assert!(!metrics.use_typo_metrics);
}
