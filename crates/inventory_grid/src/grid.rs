use std::fmt::{self, Display, Formatter};

use bevy_math::Vec2;

use crate::error::InventoryError;
use crate::item::ItemId;

/// Top-left anchor cell of a footprint. Row 0 is the top row.
///
/// Signed so that a snapped drag point can land outside the grid before it is
/// clamped back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    pub column: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Every cell covered by a footprint of `size` anchored here, row by row.
    pub fn footprint(self, size: GridSize) -> impl Iterator<Item = Self> {
        let columns = self.column..self.column + size.width as i32;
        (self.row..self.row + size.height as i32)
            .flat_map(move |row| columns.clone().map(move |column| Self { column, row }))
    }
}

impl Display for GridPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Footprint size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const ONE: Self = Self::new(1, 1);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn area(self) -> u32 {
        self.width * self.height
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed cell lattice with an occupancy table.
///
/// Geometry is expressed in content-local space: the content rectangle is
/// centred on the origin and y points up, so row 0 sits at the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cell_size: f32,
    cells: Vec<Option<ItemId>>,
}

impl Grid {
    pub fn new(columns: u32, rows: u32, cell_size: f32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            cells: vec![None; (columns * rows) as usize],
        }
    }

    /// Builds a grid whose cells fill `viewport_width`, rounded down to whole points.
    pub fn for_viewport(columns: u32, rows: u32, viewport: Vec2) -> Result<Self, InventoryError> {
        if columns == 0 || rows == 0 {
            return Err(InventoryError::EmptyGrid { columns, rows });
        }

        let cell_size = (viewport.x / columns as f32).floor();
        if cell_size < 1.0 || viewport.y <= 0.0 {
            return Err(InventoryError::ViewportTooSmall {
                width: viewport.x,
                height: viewport.y,
                columns,
            });
        }

        Ok(Self::new(columns, rows, cell_size))
    }

    pub const fn columns(&self) -> u32 {
        self.columns
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    pub fn content_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Centre of cell (0, 0).
    fn origin(&self) -> Vec2 {
        Vec2::new(
            (self.cell_size - self.width()) / 2.0,
            (self.content_height() - self.cell_size) / 2.0,
        )
    }

    pub const fn contains(&self, position: GridPosition) -> bool {
        position.column >= 0
            && position.row >= 0
            && (position.column as u32) < self.columns
            && (position.row as u32) < self.rows
    }

    fn index(&self, position: GridPosition) -> Option<usize> {
        self.contains(position)
            .then(|| (position.row as u32 * self.columns + position.column as u32) as usize)
    }

    pub fn occupant(&self, position: GridPosition) -> Option<ItemId> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Content-local centre of a footprint anchored at `position`.
    pub fn cell_center(&self, position: GridPosition, size: GridSize) -> Vec2 {
        let origin = self.origin();
        Vec2::new(
            (position.column as f32 + size.width as f32 / 2.0 - 0.5)
                .mul_add(self.cell_size, origin.x),
            (position.row as f32 + size.height as f32 / 2.0 - 0.5)
                .mul_add(-self.cell_size, origin.y),
        )
    }

    /// Snaps a footprint centre to the nearest anchor. The result is not
    /// clamped and may lie outside the grid.
    pub fn grid_position_for(&self, point: Vec2, size: GridSize) -> GridPosition {
        let origin = self.origin();
        let column = (point.x - origin.x) / self.cell_size - size.width as f32 / 2.0 + 0.5;
        let row = (origin.y - point.y) / self.cell_size - size.height as f32 / 2.0 + 0.5;
        GridPosition::new(column.round() as i32, row.round() as i32)
    }

    /// The single cell under `point`, if any.
    pub fn cell_at(&self, point: Vec2) -> Option<GridPosition> {
        let left = -self.width() / 2.0;
        let top = self.content_height() / 2.0;
        let position = GridPosition::new(
            ((point.x - left) / self.cell_size).floor() as i32,
            ((top - point.y) / self.cell_size).floor() as i32,
        );
        self.contains(position).then_some(position)
    }

    /// Marks the footprint as owned by `item`. Validity is the caller's job.
    pub fn occupy(&mut self, item: ItemId, position: GridPosition, size: GridSize) {
        for cell in position.footprint(size) {
            if let Some(slot) = self.index(cell).and_then(|index| self.cells.get_mut(index)) {
                *slot = Some(item);
            }
        }
    }

    pub fn clear(&mut self, item: ItemId) {
        for slot in &mut self.cells {
            if *slot == Some(item) {
                *slot = None;
            }
        }
    }

    pub fn is_occupied_by_other(
        &self,
        position: GridPosition,
        size: GridSize,
        excluding: ItemId,
    ) -> bool {
        position
            .footprint(size)
            .any(|cell| self.occupant(cell).is_some_and(|owner| owner != excluding))
    }

    /// Cells currently owned by `item`, in row-major order.
    pub fn cells_of(&self, item: ItemId) -> impl Iterator<Item = GridPosition> + '_ {
        self.cells()
            .filter(move |&(_, owner)| owner == Some(item))
            .map(|(position, _)| position)
    }

    /// Every cell with its occupant, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (GridPosition, Option<ItemId>)> + '_ {
        let columns = self.columns.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, owner)| {
            (
                GridPosition::new((index % columns) as i32, (index / columns) as i32),
                *owner,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(12, 60, 30.0)
    }

    #[test]
    fn cell_center_of_top_left_cell() {
        let grid = grid();
        let center = grid.cell_center(GridPosition::new(0, 0), GridSize::ONE);
        assert_eq!(center, Vec2::new(-165.0, 885.0));
    }

    #[test]
    fn cell_center_of_multi_cell_footprint() {
        let grid = grid();
        let center = grid.cell_center(GridPosition::new(6, 2), GridSize::new(2, 2));
        assert_eq!(center, Vec2::new(30.0, 810.0));
    }

    #[test]
    fn snapping_rounds_to_nearest_anchor() {
        let grid = grid();
        let size = GridSize::new(2, 2);
        let exact = grid.cell_center(GridPosition::new(6, 2), size);

        assert_eq!(grid.grid_position_for(exact, size), GridPosition::new(6, 2));
        assert_eq!(
            grid.grid_position_for(exact + Vec2::new(14.0, -14.0), size),
            GridPosition::new(6, 2)
        );
        assert_eq!(
            grid.grid_position_for(exact + Vec2::new(16.0, -16.0), size),
            GridPosition::new(7, 3)
        );
    }

    #[test]
    fn snapping_can_leave_the_grid() {
        let grid = grid();
        let far_left = Vec2::new(-400.0, 885.0);
        assert!(grid.grid_position_for(far_left, GridSize::ONE).column < 0);
    }

    #[test]
    fn cell_at_hits_cells_and_misses_outside() {
        let grid = grid();
        assert_eq!(
            grid.cell_at(Vec2::new(-179.0, 899.0)),
            Some(GridPosition::new(0, 0))
        );
        assert_eq!(
            grid.cell_at(Vec2::new(179.0, -899.0)),
            Some(GridPosition::new(11, 59))
        );
        assert_eq!(grid.cell_at(Vec2::new(-181.0, 0.0)), None);
        assert_eq!(grid.cell_at(Vec2::new(0.0, 901.0)), None);
    }

    #[test]
    fn occupy_and_clear_footprint() {
        let mut grid = grid();
        let item = ItemId(3);
        grid.occupy(item, GridPosition::new(6, 2), GridSize::new(2, 2));

        let cells: Vec<_> = grid.cells_of(item).collect();
        assert_eq!(
            cells,
            vec![
                GridPosition::new(6, 2),
                GridPosition::new(7, 2),
                GridPosition::new(6, 3),
                GridPosition::new(7, 3),
            ]
        );

        grid.clear(item);
        assert_eq!(grid.cells_of(item).count(), 0);
    }

    #[test]
    fn occupied_by_other_ignores_the_excluded_item() {
        let mut grid = grid();
        grid.occupy(ItemId(0), GridPosition::new(6, 2), GridSize::new(2, 2));

        assert!(grid.is_occupied_by_other(GridPosition::new(7, 3), GridSize::ONE, ItemId(1)));
        assert!(!grid.is_occupied_by_other(
            GridPosition::new(6, 2),
            GridSize::new(2, 2),
            ItemId(0)
        ));
        assert!(!grid.is_occupied_by_other(GridPosition::new(8, 2), GridSize::ONE, ItemId(1)));
    }

    #[test]
    fn viewport_sets_floored_cell_size() {
        let grid = Grid::for_viewport(12, 60, Vec2::new(320.0, 352.0)).expect("valid viewport");
        assert!((grid.cell_size() - 26.0).abs() < f32::EPSILON);
        assert!((grid.content_height() - 1560.0).abs() < f32::EPSILON);
    }

    #[test]
    fn narrow_viewport_is_rejected() {
        assert!(matches!(
            Grid::for_viewport(12, 60, Vec2::new(11.0, 100.0)),
            Err(InventoryError::ViewportTooSmall { .. })
        ));
        assert!(matches!(
            Grid::for_viewport(0, 60, Vec2::new(320.0, 100.0)),
            Err(InventoryError::EmptyGrid { .. })
        ));
    }
}
