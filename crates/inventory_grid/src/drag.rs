use bevy_math::Vec2;
use tracing::debug;

use crate::grid::{Grid, GridPosition, GridSize};
use crate::item::{ItemId, ItemSet};
use crate::placement::{can_place, clamp_to_bounds};

/// Footprint the dragged item would land on, and whether it may land there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPreview {
    pub position: GridPosition,
    pub size: GridSize,
    pub valid: bool,
}

impl DropPreview {
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> {
        self.position.footprint(self.size)
    }
}

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Committed {
        item: ItemId,
        from: GridPosition,
        to: GridPosition,
    },
    Reverted {
        item: ItemId,
        to: GridPosition,
    },
}

impl DropOutcome {
    pub const fn item(&self) -> ItemId {
        match *self {
            Self::Committed { item, .. } | Self::Reverted { item, .. } => item,
        }
    }

    /// Where the item rests after the drop.
    pub const fn position(&self) -> GridPosition {
        match *self {
            Self::Committed { to, .. } | Self::Reverted { to, .. } => to,
        }
    }

    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    item: ItemId,
    size: GridSize,
    origin: GridPosition,
    grab_offset: Vec2,
    center: Vec2,
    candidate: Option<DropPreview>,
}

impl DragSession {
    pub const fn item(&self) -> ItemId {
        self.item
    }

    pub const fn origin(&self) -> GridPosition {
        self.origin
    }

    /// Content-local centre the item is drawn at. Not clamped to the grid.
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    pub const fn candidate(&self) -> Option<DropPreview> {
        self.candidate
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Pick-up, live preview and drop of a single item.
///
/// While a session is open the dragged item is absent from the occupancy
/// table, so its own cells never block its candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn preview(&self) -> Option<DropPreview> {
        self.session().and_then(DragSession::candidate)
    }

    /// Starts a session for `item` grabbed at the content-local `pointer`.
    /// Returns false when a session is already open or the item is unknown.
    pub fn pick_up(
        &mut self,
        grid: &mut Grid,
        items: &mut ItemSet,
        item: ItemId,
        pointer: Vec2,
    ) -> bool {
        if let Some(session) = self.session() {
            debug!("Ignoring pick-up of {item}, {} is being dragged", session.item);
            return false;
        }

        let Some(picked) = items.get_mut(item) else {
            return false;
        };

        let center = grid.cell_center(picked.position(), picked.size());
        grid.clear(item);
        picked.set_dragging(true);

        debug!("Picked up {item} from {}", picked.position());
        self.state = DragState::Dragging(DragSession {
            item,
            size: picked.size(),
            origin: picked.position(),
            grab_offset: pointer - center,
            center,
            candidate: None,
        });
        true
    }

    /// Moves the dragged item under the content-local `pointer` and refreshes the preview.
    pub fn drag_to(&mut self, grid: &Grid, items: &ItemSet, pointer: Vec2) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        let Some(item) = items.get(session.item) else {
            return;
        };

        session.center = pointer - session.grab_offset;
        let snapped = grid.grid_position_for(session.center, session.size);
        let position = clamp_to_bounds(grid, session.size, snapped);
        session.candidate = Some(DropPreview {
            position,
            size: session.size,
            valid: can_place(grid, item, position),
        });
    }

    /// Drops at the current candidate when it is still valid, otherwise
    /// returns the item to where it was picked up.
    pub fn release(&mut self, grid: &mut Grid, items: &mut ItemSet) -> Option<DropOutcome> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        let target = session.candidate.map(|candidate| candidate.position).filter(|&position| {
            items
                .get(session.item)
                .is_some_and(|item| can_place(grid, item, position))
        });

        Some(match target {
            Some(to) => commit(grid, items, &session, to),
            None => revert(grid, items, &session),
        })
    }

    /// Aborts the session. Never commits.
    pub fn cancel(&mut self, grid: &mut Grid, items: &mut ItemSet) -> Option<DropOutcome> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        Some(revert(grid, items, &session))
    }
}

fn commit(
    grid: &mut Grid,
    items: &mut ItemSet,
    session: &DragSession,
    to: GridPosition,
) -> DropOutcome {
    settle(grid, items, session, to);
    debug!("Dropped {} at {to}", session.item);
    DropOutcome::Committed {
        item: session.item,
        from: session.origin,
        to,
    }
}

fn revert(grid: &mut Grid, items: &mut ItemSet, session: &DragSession) -> DropOutcome {
    debug_assert!(
        items
            .get(session.item)
            .is_none_or(|item| can_place(grid, item, session.origin)),
        "origin {} of {} was taken while it was dragged",
        session.origin,
        session.item
    );
    settle(grid, items, session, session.origin);
    debug!("Returned {} to {}", session.item, session.origin);
    DropOutcome::Reverted {
        item: session.item,
        to: session.origin,
    }
}

fn settle(grid: &mut Grid, items: &mut ItemSet, session: &DragSession, at: GridPosition) {
    grid.occupy(session.item, at, session.size);
    if let Some(item) = items.get_mut(session.item) {
        item.set_position(at);
        item.set_dragging(false);
    }
}
