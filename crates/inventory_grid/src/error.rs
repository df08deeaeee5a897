use thiserror::Error;

use crate::grid::{GridPosition, GridSize};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Grid needs at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },

    #[error("Viewport {width}x{height} is too small for {columns} columns")]
    ViewportTooSmall { width: f32, height: f32, columns: u32 },

    #[error("Item {name} has an empty footprint")]
    EmptyFootprint { name: String },

    #[error("Item {name} ({size}) does not fit at {position}")]
    OutOfBounds {
        name: String,
        size: GridSize,
        position: GridPosition,
    },

    #[error("Item {name} at {position} overlaps {other}")]
    Overlap {
        name: String,
        position: GridPosition,
        other: String,
    },
}
