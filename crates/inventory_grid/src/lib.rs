//! Headless inventory grid for the stash screen.
//!
//! Items with rectangular footprints rest on a fixed cell lattice. Dragging
//! an item lifts it off the grid, previews the snapped drop cell with a
//! valid/invalid flag, and either commits or returns it to where it started.
//! Gestures that start between items scroll the lattice vertically, with a
//! frame-rate independent fling after fast releases.
//!
//! Nothing here renders. A view layer feeds [`InventoryEngine`] viewport-local
//! pointer events plus a per-frame tick, and reads back
//! [`InventoryEngine::cell_views`], [`InventoryEngine::item_views`],
//! [`InventoryEngine::drop_preview`] and [`InventoryEngine::scroll_offset`].

mod config;
mod drag;
mod engine;
mod error;
mod grid;
mod item;
mod loadout;
mod placement;
mod scroll;

pub use config::*;
pub use drag::*;
pub use engine::*;
pub use error::InventoryError;
pub use grid::{Grid, GridPosition, GridSize};
pub use item::{Item, ItemId, ItemSet, ItemSpec};
pub use loadout::starter_loadout;
pub use placement::{can_place, clamp_to_bounds, fits_in_bounds};
pub use scroll::{ScrollBounds, ScrollController, ScrollPhase};
