//! Bar widths for the assets columns.
//!
//! Two scales:
//! - [`BarScale::Percentage`]: `barPercentage` verbatim, as `"<n>%"`.
//! - [`BarScale::RelativePixels`]: pixels, relative to the first item of the
//!   column, which is pinned at [`FIRST_BAR_WIDTH_PX`].

use agenda_core::types::Item;
use agenda_core::BarScale;

/// Width of the first bar of a column under [`BarScale::RelativePixels`].
pub const FIRST_BAR_WIDTH_PX: u32 = 70;

/// Trailing space reserved inside every bar track.
pub const BAR_TRACK_PADDING: &str = "55px";

/// CSS `width` for a percentage, printed exactly as given (`42.5` → `42.5%`).
///
/// `f64`'s `Display` is the shortest string that round-trips, so the rendered
/// number parses back to the input value.
pub fn percentage_width(percentage: f64) -> String {
    format!("{percentage}%")
}

/// Parse a currency/unit amount like `"$10.5M"` or `"$800K"`, in millions.
///
/// `$`, `,` and whitespace are ignored. Returns `None` when what remains is
/// not a number.
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    let (digits, multiplier) = if let Some(rest) = cleaned.strip_suffix('M') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = cleaned.strip_suffix('K') {
        (rest, 1_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };
    let number: f64 = digits.parse().ok()?;
    number.is_finite().then(|| number * (multiplier / 1_000_000.0))
}

/// Pixel widths for every item of a column, in order.
///
/// The first item is always [`FIRST_BAR_WIDTH_PX`]. Later items scale by
/// their amount relative to the first; an unparseable amount or a
/// non-positive baseline gives `0`. Halves round to even.
pub fn relative_widths(items: &[Item]) -> Vec<u32> {
    let baseline = items
        .first()
        .and_then(|item| item.value.as_deref())
        .and_then(parse_amount);

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == 0 {
                return FIRST_BAR_WIDTH_PX;
            }
            let current = item.value.as_deref().and_then(parse_amount);
            match (baseline, current) {
                (Some(base), Some(cur)) if base > 0.0 => {
                    let width = (cur / base * f64::from(FIRST_BAR_WIDTH_PX)).round_ties_even();
                    width.max(0.0) as u32
                }
                _ => 0,
            }
        })
        .collect()
}

/// CSS `width` values for a column under `scale`, one per item.
///
/// Items without `barPercentage` get `None`: they render no bar.
pub fn column_widths(items: &[Item], scale: BarScale) -> Vec<Option<String>> {
    match scale {
        BarScale::Percentage => items
            .iter()
            .map(|item| item.bar_percentage.map(percentage_width))
            .collect(),
        BarScale::RelativePixels => items
            .iter()
            .zip(relative_widths(items))
            .map(|(item, px)| item.bar_percentage.map(|_| format!("{px}px")))
            .collect(),
    }
}
