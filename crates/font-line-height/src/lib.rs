//! # Font Line Height
//!
//! Symmetrically expand a font's vertical metrics so the line height
//! (`ascent + descent`, line-gap excluded) reaches a target ratio of its
//! original value. The growth is split evenly between ascent and descent,
//! the line-gap is zeroed in both the `hhea` and `OS/2` tables, the
//! `USE_TYPO_METRICS` bit is set, and the Windows metrics mirror the new
//! values for renderers that fall back to them.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use font_line_height::{apply_line_height, output_path};
//!
//! let input = Path::new("Foo.ttf");
//! let data = std::fs::read(input).unwrap();
//! let rescaled = apply_line_height(&data, 1.2).unwrap();
//! std::fs::write(output_path(input, 1.2), rescaled.data).unwrap();
//! ```

mod error;
mod metrics;

pub use error::{Error, Result};
pub use metrics::{Expansion, VerticalMetrics, expand};

use std::path::{Path, PathBuf};

use log::warn;
use read_fonts::{FontRef, TableProvider};
use write_fonts::{
    FontBuilder,
    from_obj::ToOwnedTable,
    tables::{
        hhea::Hhea,
        os2::{Os2, SelectionFlags},
    },
    types::FWord,
};

/// A rebuilt font plus the metric values written into it.
#[derive(Debug, Clone)]
pub struct Rescaled {
    /// Serialized font data.
    pub data: Vec<u8>,
    /// The ascent/descent values now in both metrics tables.
    pub expansion: Expansion,
}

/// Rescale the vertical metrics of font data to `ratio` times the original
/// `ascent + descent`.
///
/// Rewrites `hhea` and `OS/2` as described in the crate docs; all other
/// tables are copied through untouched. The input slice is never modified.
pub fn apply_line_height(data: &[u8], ratio: f64) -> Result<Rescaled> {
    let font = FontRef::new(data)?;
    let hhea = font.hhea()?;
    let os2 = font.os2()?;

    let ascent = i32::from(hhea.ascender().to_i16());
    let descent = -i32::from(hhea.descender().to_i16());

    if ratio <= 1.0 {
        warn!("ratio {ratio} does not expand metrics; only line gap and flags change");
    }
    let expansion = expand(ascent, descent, ratio);

    let new_ascent = fword(expansion.ascent)?;
    let new_descent = fword(-expansion.descent)?;

    let mut new_hhea: Hhea = hhea.to_owned_table();
    new_hhea.ascender = FWord::new(new_ascent);
    new_hhea.descender = FWord::new(new_descent);
    new_hhea.line_gap = FWord::new(0);

    let mut new_os2: Os2 = os2.to_owned_table();
    new_os2.s_typo_ascender = new_ascent;
    new_os2.s_typo_descender = new_descent;
    new_os2.s_typo_line_gap = 0;
    new_os2.fs_selection = SelectionFlags::from_bits_truncate(
        new_os2.fs_selection.bits() | SelectionFlags::USE_TYPO_METRICS.bits(),
    );
    new_os2.us_win_ascent = uword(expansion.ascent)?;
    new_os2.us_win_descent = uword(expansion.descent)?;

    let mut builder = FontBuilder::new();
    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }
    builder.add_table(&new_hhea)?;
    builder.add_table(&new_os2)?;

    Ok(Rescaled { data: builder.build(), expansion })
}

/// Read the current vertical metrics from font data.
///
/// Requires both the `hhea` and `OS/2` tables.
pub fn read_metrics(data: &[u8]) -> Result<VerticalMetrics> {
    let font = FontRef::new(data)?;
    let hhea = font.hhea()?;
    let os2 = font.os2()?;

    Ok(VerticalMetrics {
        ascender: hhea.ascender().to_i16(),
        descender: hhea.descender().to_i16(),
        line_gap: hhea.line_gap().to_i16(),
        typo_ascender: os2.s_typo_ascender(),
        typo_descender: os2.s_typo_descender(),
        typo_line_gap: os2.s_typo_line_gap(),
        win_ascent: os2.us_win_ascent(),
        win_descent: os2.us_win_descent(),
        use_typo_metrics: os2.fs_selection().contains(SelectionFlags::USE_TYPO_METRICS),
    })
}

/// Derive the sibling output path for a rescaled font: strip the extension,
/// append `.sym<pct>p` where `pct` is `ratio * 100` truncated to an integer,
/// then re-append the original extension.
///
/// `Foo.ttf` at ratio 1.2 becomes `Foo.sym120p.ttf`.
pub fn output_path(path: &Path, ratio: f64) -> PathBuf {
    let pct = (ratio * 100.0) as i64;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}.sym{pct}p.{}", ext.to_string_lossy()),
        None => format!("{stem}.sym{pct}p"),
    };
    path.with_file_name(name)
}

fn fword(value: i32) -> Result<i16> {
    i16::try_from(value).map_err(|_| Error::MetricRange(value))
}

fn uword(value: i32) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::MetricRange(value))
}
