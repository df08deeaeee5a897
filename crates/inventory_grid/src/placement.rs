//! Drop validation. Everything here is read-only so it can run on every
//! pointer move while a drag preview is shown.

use crate::grid::{Grid, GridPosition, GridSize};
use crate::item::Item;

/// Whether a footprint of `size` anchored at `position` lies fully inside the grid.
pub const fn fits_in_bounds(grid: &Grid, size: GridSize, position: GridPosition) -> bool {
    position.column >= 0
        && position.row >= 0
        && position.column as i64 + size.width as i64 <= grid.columns() as i64
        && position.row as i64 + size.height as i64 <= grid.rows() as i64
}

/// Whether `item` may rest at `position`.
///
/// Cells already owned by the item itself count as free, so dropping an item
/// back onto its own footprint is always allowed.
pub fn can_place(grid: &Grid, item: &Item, position: GridPosition) -> bool {
    fits_in_bounds(grid, item.size(), position)
        && !grid.is_occupied_by_other(position, item.size(), item.id())
}

/// Pulls a snapped candidate back to the nearest anchor where the footprint fits.
pub fn clamp_to_bounds(grid: &Grid, size: GridSize, position: GridPosition) -> GridPosition {
    let max_column = grid.columns().saturating_sub(size.width) as i32;
    let max_row = grid.rows().saturating_sub(size.height) as i32;
    GridPosition::new(
        position.column.clamp(0, max_column),
        position.row.clamp(0, max_row),
    )
}
