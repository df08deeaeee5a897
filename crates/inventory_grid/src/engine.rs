use bevy_math::Vec2;
use tracing::{debug, info, warn};

use crate::config::InventoryConfig;
use crate::drag::{DragController, DragState, DropOutcome, DropPreview};
use crate::error::InventoryError;
use crate::grid::{Grid, GridPosition, GridSize};
use crate::item::{Item, ItemId, ItemSet, ItemSpec};
use crate::loadout::starter_loadout;
use crate::placement::fits_in_bounds;
use crate::scroll::{ScrollBounds, ScrollController};

/// A grid cell as the view layer draws it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub position: GridPosition,
    /// Content-local centre
    pub center: Vec2,
    pub occupied: bool,
    /// Occupied cells drop their stroke
    pub outline_hidden: bool,
}

/// An item as the view layer draws it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView<'a> {
    pub id: ItemId,
    pub name: &'a str,
    pub size: GridSize,
    /// Content-local centre; follows the pointer while dragged
    pub center: Vec2,
    pub selected: bool,
    pub dragging: bool,
}

/// One inventory session: grid, items, drag and scroll state.
///
/// Pointer coordinates are viewport-local: the origin is the viewport centre
/// and y points up. The content is offset vertically by [`Self::scroll_offset`].
#[derive(Debug, Clone)]
pub struct InventoryEngine {
    viewport: Vec2,
    grid: Grid,
    items: ItemSet,
    drag: DragController,
    scroll: ScrollController,
}

impl InventoryEngine {
    pub fn new(
        config: &InventoryConfig,
        viewport: Vec2,
        loadout: impl IntoIterator<Item = ItemSpec>,
    ) -> Result<Self, InventoryError> {
        let mut grid = Grid::for_viewport(config.columns, config.rows, viewport)?;
        let mut items = ItemSet::default();
        for spec in loadout {
            place_initial(&mut grid, &mut items, spec)?;
        }

        let bounds = ScrollBounds::new(viewport.y, grid.content_height());
        info!(
            "Inventory opened: {}x{} cells of {} points, {} items",
            grid.columns(),
            grid.rows(),
            grid.cell_size(),
            items.len()
        );

        Ok(Self {
            viewport,
            grid,
            items,
            drag: DragController::default(),
            scroll: ScrollController::new(bounds, config.scroll),
        })
    }

    pub fn with_starter_loadout(
        config: &InventoryConfig,
        viewport: Vec2,
    ) -> Result<Self, InventoryError> {
        Self::new(config, viewport, starter_loadout())
    }

    pub const fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.items.selected()
    }

    pub const fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub const fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub const fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// No drag session is open.
    pub const fn is_quiescent(&self) -> bool {
        !self.drag.is_dragging()
    }

    pub fn viewport_contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.viewport.x / 2.0 && point.y.abs() <= self.viewport.y / 2.0
    }

    /// Converts a viewport-local point into content-local space.
    pub fn to_content(&self, point: Vec2) -> Vec2 {
        point - Vec2::new(0.0, self.scroll.offset())
    }

    const fn gesture_open(&self) -> bool {
        self.drag.is_dragging() || self.scroll.is_tracking()
    }

    /// Starts a drag when `point` lands on an item, a scroll anywhere else in
    /// the viewport. Ignored while another gesture is open.
    pub fn pointer_down(&mut self, point: Vec2, time: f64) {
        if self.gesture_open() {
            warn!("Ignoring secondary pointer at {point}");
            return;
        }
        if !self.viewport_contains(point) {
            return;
        }

        self.scroll.stop();
        let content = self.to_content(point);
        let hit = self
            .grid
            .cell_at(content)
            .and_then(|cell| self.grid.occupant(cell));

        match hit {
            Some(item) => {
                if self
                    .drag
                    .pick_up(&mut self.grid, &mut self.items, item, content)
                {
                    self.items.select(item);
                }
            }
            None => {
                debug!("Scrolling from {point}");
                self.scroll.begin(point.y, time);
            }
        }
    }

    pub fn pointer_move(&mut self, point: Vec2, time: f64) {
        if self.drag.is_dragging() {
            let content = self.to_content(point);
            self.drag.drag_to(&self.grid, &self.items, content);
        } else {
            self.scroll.track(point.y, time);
        }
    }

    /// Ends the open gesture. The release point is not sampled again; the
    /// last move already carried the pointer there.
    pub fn pointer_up(&mut self, _point: Vec2, time: f64) -> Option<DropOutcome> {
        if self.drag.is_dragging() {
            return self.drag.release(&mut self.grid, &mut self.items);
        }
        self.scroll.release(time);
        None
    }

    /// Aborts the open gesture. A drag always goes back to where it started.
    pub fn pointer_cancel(&mut self) -> Option<DropOutcome> {
        if self.drag.is_dragging() {
            return self.drag.cancel(&mut self.grid, &mut self.items);
        }
        self.scroll.cancel();
        None
    }

    /// Per-frame tick. Only does work while a fling is decelerating.
    pub fn update(&mut self, time: f64) {
        self.scroll.step(time);
    }

    pub fn cell_views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.cells().map(|(position, owner)| CellView {
            position,
            center: self.grid.cell_center(position, GridSize::ONE),
            occupied: owner.is_some(),
            outline_hidden: owner.is_some(),
        })
    }

    pub fn item_views(&self) -> impl Iterator<Item = ItemView<'_>> + '_ {
        let dragged = self.drag.session();
        self.items.iter().map(move |item| {
            let center = dragged
                .filter(|session| session.item() == item.id())
                .map_or_else(
                    || self.grid.cell_center(item.position(), item.size()),
                    |session| session.center(),
                );
            ItemView {
                id: item.id(),
                name: item.name(),
                size: item.size(),
                center,
                selected: item.is_selected(),
                dragging: item.is_dragging(),
            }
        })
    }

    /// Present only while a drag has a candidate.
    pub fn drop_preview(&self) -> Option<DropPreview> {
        self.drag.preview()
    }
}

fn place_initial(grid: &mut Grid, items: &mut ItemSet, spec: ItemSpec) -> Result<(), InventoryError> {
    if spec.size.is_empty() {
        return Err(InventoryError::EmptyFootprint { name: spec.name });
    }
    if !fits_in_bounds(grid, spec.size, spec.position) {
        return Err(InventoryError::OutOfBounds {
            name: spec.name,
            size: spec.size,
            position: spec.position,
        });
    }
    let blocker = spec
        .position
        .footprint(spec.size)
        .find_map(|cell| grid.occupant(cell))
        .and_then(|other| items.get(other));
    if let Some(other) = blocker {
        return Err(InventoryError::Overlap {
            name: spec.name,
            position: spec.position,
            other: other.name().to_owned(),
        });
    }

    let (position, size) = (spec.position, spec.size);
    let id = items.insert(spec);
    grid.occupy(id, position, size);
    Ok(())
}
