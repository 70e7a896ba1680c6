//! Pure vertical-metrics math, independent of any font binary.

use log::debug;

/// The computed symmetric expansion of a font's ascent/descent.
///
/// `descent` is a positive magnitude; the tables store it negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// New ascent.
    pub ascent: i32,
    /// New descent magnitude.
    pub descent: i32,
    /// Line height the new values sum to.
    pub target: i32,
}

impl Expansion {
    /// Total line height, `ascent + descent`.
    pub fn line_height(&self) -> i32 {
        self.ascent + self.descent
    }
}

/// Snapshot of the vertical-metrics fields of both tables.
#[derive(Debug, Clone, Copy)]
pub struct VerticalMetrics {
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub typo_line_gap: i16,
    pub win_ascent: u16,
    pub win_descent: u16,
    pub use_typo_metrics: bool,
}

/// Expand `ascent`/`descent` (positive magnitude) so their sum reaches
/// `round(ratio * (ascent + descent))`, splitting the growth evenly between
/// the two sides and giving the odd unit to ascent.
///
/// Metrics are never shrunk: a ratio at or below 1.0 clamps to a no-op
/// expansion of zero.
pub fn expand(ascent: i32, descent: i32, ratio: f64) -> Expansion {
    let original = ascent + descent;
    let target = (original as f64 * ratio).round() as i32;
    let need = (target - original).max(0);
    let add_each = need / 2;

    let expansion = Expansion {
        ascent: ascent + add_each + need % 2,
        descent: descent + add_each,
        target: original + need,
    };
    debug!(
        "expand {ascent}+{descent} -> {}+{} (target {})",
        expansion.ascent, expansion.descent, expansion.target
    );
    expansion
}
