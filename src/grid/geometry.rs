//! Geometry calculator (pure functions).
//!
//! Derives column width, column count, poster size and row height from the
//! measured width, the size class and the display toggles. Nothing here keeps
//! state; identical inputs always produce identical output, which is what lets
//! the layout holder skip recomputation.

use super::dimensions::LayoutDimensions;
use crate::model::{DisplayOptions, SizeClass, SortKey};

/// Derived numeric layout for the current viewport and options.
///
/// # Invariants
/// - `column_count >= 1`
/// - `column_count == max(1, width / column_width)` (1 when `column_width` is 0)
/// - `row_height >= item_height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportGeometry {
    /// Measured viewport width. 0 means not yet laid out.
    pub width: u32,
    /// Width of one grid column, padding included.
    pub column_width: u32,
    /// Number of columns per row.
    pub column_count: u32,
    /// Poster width (column width minus padding on both sides).
    pub item_width: u32,
    /// Poster height.
    pub item_height: u32,
    /// Full row height: poster plus every reserved band.
    pub row_height: u32,
}

impl ViewportGeometry {
    /// Geometry used before the first width measurement arrives.
    pub fn initial(is_small_screen: bool, dims: &LayoutDimensions) -> Self {
        let poster = dims.initial_poster_size;
        Self {
            width: 0,
            column_width: dims.max_column_width,
            column_count: 1,
            item_width: poster,
            item_height: poster,
            row_height: row_height(
                poster,
                None,
                is_small_screen,
                &DisplayOptions::default(),
                dims,
            ),
        }
    }

    /// Poster grid geometry.
    pub fn posters(
        width: u32,
        is_small_screen: bool,
        sort_key: Option<&SortKey>,
        options: &DisplayOptions,
        dims: &LayoutDimensions,
    ) -> Self {
        let column_width = column_width(width, options.size_class, is_small_screen, dims);
        let column_count = column_count(width, column_width);
        let padding = dims.column_padding(is_small_screen).saturating_mul(2);
        let item_width = column_width.saturating_sub(padding);
        let item_height = item_height(item_width);
        let row_height = row_height(item_height, sort_key, is_small_screen, options, dims);

        Self {
            width,
            column_width,
            column_count,
            item_width,
            item_height,
            row_height,
        }
    }

    /// Single full-width column with fixed-height rows.
    pub fn table(width: u32, dims: &LayoutDimensions) -> Self {
        Self {
            width,
            column_width: width,
            column_count: 1,
            item_width: width,
            item_height: dims.table_row_height,
            row_height: dims.table_row_height,
        }
    }

    /// Whether a positive width has been measured.
    pub fn is_laid_out(&self) -> bool {
        self.width > 0
    }
}

/// Width of one column for the given viewport width.
///
/// Packs `width / max_column_width` columns plus a size-class bias, then
/// divides the width evenly. A large size class at an exact multiple of the
/// maximum column width uses the maximum width directly, leaving no edge gap.
/// This favors filling the row over hitting a target poster width, so the
/// result is not monotonic across multiples of the maximum column width.
pub fn column_width(
    width: u32,
    size_class: SizeClass,
    is_small_screen: bool,
    dims: &LayoutDimensions,
) -> u32 {
    let max_column_width = dims.max_column_width(is_small_screen).max(1);
    let columns = width / max_column_width;
    let remainder = width % max_column_width;

    if remainder == 0 && size_class == SizeClass::Large {
        return max_column_width;
    }

    width / (columns + size_class.extra_columns())
}

/// Columns that fit in `width`, never less than one.
pub fn column_count(width: u32, column_width: u32) -> u32 {
    if column_width == 0 {
        return 1;
    }
    (width / column_width).max(1)
}

/// Posters are square.
pub fn item_height(item_width: u32) -> u32 {
    item_width
}

/// Total row height for a poster of `item_height`.
///
/// Sums the poster, progress bar, next-event annotation and padding bands,
/// plus one detail line per enabled toggle and one more when the sort key
/// shows an annotation that no toggle already covers.
pub fn row_height(
    item_height: u32,
    sort_key: Option<&SortKey>,
    is_small_screen: bool,
    options: &DisplayOptions,
    dims: &LayoutDimensions,
) -> u32 {
    let line = dims.detail_line_height;
    let lines = [
        options.show_title,
        options.show_monitored,
        options.show_quality_profile,
        sort_key_reserves_line(sort_key, options.show_quality_profile),
    ]
    .into_iter()
    .filter(|&reserved| reserved)
    .count() as u32;

    // bands come from config, so stay total on oversized values
    item_height
        .saturating_add(dims.progress_bar_height(options.detailed_progress_bar))
        .saturating_add(dims.next_airing_height)
        .saturating_add(dims.column_padding(is_small_screen))
        .saturating_add(line.saturating_mul(lines))
}

/// Whether the sort key needs its own annotation line.
///
/// `qualityProfileId` shares the quality profile line, so it only reserves a
/// line of its own when that line is hidden. `nextAiring` is already covered
/// by the fixed next-event band.
pub fn sort_key_reserves_line(sort_key: Option<&SortKey>, show_quality_profile: bool) -> bool {
    match sort_key {
        Some(
            SortKey::Seasons
            | SortKey::PreviousAiring
            | SortKey::Added
            | SortKey::Path
            | SortKey::SizeOnDisk,
        ) => true,
        Some(SortKey::QualityProfileId) => !show_quality_profile,
        _ => false,
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
