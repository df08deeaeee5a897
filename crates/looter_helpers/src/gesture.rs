use bevy::prelude::*;

/// Left edge swipe used for "go back", in screen coordinates (x grows to the right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSwipe {
    /// How close to the left edge the press must start
    pub edge_threshold: f32,
    /// Minimum rightward travel before release
    pub swipe_threshold: f32,
}

impl Default for EdgeSwipe {
    fn default() -> Self {
        Self {
            edge_threshold: 40.0,
            swipe_threshold: 60.0,
        }
    }
}

impl EdgeSwipe {
    pub fn starts_at(&self, start: Vec2) -> bool {
        start.x <= self.edge_threshold
    }

    pub fn recognizes(&self, start: Vec2, end: Vec2) -> bool {
        self.starts_at(start) && end.x - start.x >= self.swipe_threshold
    }
}

/// Tracks the press that may turn into an edge swipe.
#[derive(Resource, Default, Debug)]
pub struct EdgeSwipeState {
    pub start: Option<Vec2>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_from_the_edge() {
        let swipe = EdgeSwipe::default();
        assert!(swipe.recognizes(Vec2::new(10.0, 300.0), Vec2::new(80.0, 320.0)));
        assert!(swipe.recognizes(Vec2::new(40.0, 300.0), Vec2::new(100.0, 300.0)));
    }

    #[test]
    fn short_or_inner_swipes_are_ignored() {
        let swipe = EdgeSwipe::default();
        assert!(!swipe.recognizes(Vec2::new(10.0, 300.0), Vec2::new(60.0, 300.0)));
        assert!(!swipe.recognizes(Vec2::new(41.0, 300.0), Vec2::new(200.0, 300.0)));
        assert!(!swipe.recognizes(Vec2::new(30.0, 300.0), Vec2::new(-40.0, 300.0)));
    }
}
