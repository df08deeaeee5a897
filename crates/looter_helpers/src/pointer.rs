use bevy::prelude::*;

/// Which device owns a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    Cancel,
}

/// Follows the single pointer that opened the current gesture. Presses from
/// other pointers, and their moves and releases, produce no events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    active: Option<(PointerId, Vec2)>,
}

impl PointerTracker {
    pub fn active(&self) -> Option<PointerId> {
        self.active.map(|(id, _)| id)
    }

    pub fn press(&mut self, id: PointerId, point: Vec2) -> Option<PointerEvent> {
        if let Some((owner, _)) = self.active {
            debug!("Ignoring {id:?} while {owner:?} holds the gesture");
            return None;
        }
        self.active = Some((id, point));
        Some(PointerEvent::Down(point))
    }

    /// Reports only movement of the owning pointer.
    pub fn hold(&mut self, id: PointerId, point: Vec2) -> Option<PointerEvent> {
        match &mut self.active {
            Some((owner, last)) if *owner == id && *last != point => {
                *last = point;
                Some(PointerEvent::Move(point))
            }
            _ => None,
        }
    }

    pub fn release(&mut self, id: PointerId, point: Vec2) -> Option<PointerEvent> {
        self.take_if_owner(id).then_some(PointerEvent::Up(point))
    }

    pub fn cancel(&mut self, id: PointerId) -> Option<PointerEvent> {
        self.take_if_owner(id).then_some(PointerEvent::Cancel)
    }

    /// The owning pointer vanished without a release, e.g. focus loss.
    pub fn lose(&mut self) -> Option<PointerEvent> {
        self.active.take().map(|_| PointerEvent::Cancel)
    }

    fn take_if_owner(&mut self, id: PointerId) -> bool {
        let owns = self.active().is_some_and(|owner| owner == id);
        if owns {
            self.active = None;
        }
        owns
    }
}
