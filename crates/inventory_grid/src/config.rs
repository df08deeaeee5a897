use bevy_math::Vec2;

pub const DEFAULT_COLUMNS: u32 = 12;
pub const DEFAULT_ROWS: u32 = 60;

/// Tuning for momentum scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Velocity multiplier per reference frame while decelerating
    pub decay_rate: f32,
    /// Frame rate the decay rate is expressed against
    pub reference_frame_rate: f32,
    /// Minimum release speed (points per second) that starts a fling
    pub fling_threshold: f32,
    /// Speed (points per second) under which a fling stops
    pub stop_threshold: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.975,
            reference_frame_rate: 60.0,
            fling_threshold: 20.0,
            stop_threshold: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryConfig {
    /// Number of cell columns
    pub columns: u32,
    /// Number of cell rows
    pub rows: u32,
    /// Gap between the scene edges and the grid viewport
    pub horizontal_margin: f32,
    /// Viewport height as a share of the scene height
    pub viewport_height_ratio: f32,
    pub scroll: ScrollConfig,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            horizontal_margin: 20.0,
            viewport_height_ratio: 0.55,
            scroll: ScrollConfig::default(),
        }
    }
}

/// Where the grid viewport sits inside a scene centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLayout {
    pub size: Vec2,
    pub center: Vec2,
}

impl ViewportLayout {
    /// Converts a scene point into viewport-local space.
    pub fn to_local(&self, scene_point: Vec2) -> Vec2 {
        scene_point - self.center
    }
}

impl InventoryConfig {
    /// The viewport spans the scene width minus margins and rests one margin
    /// above the bottom edge.
    pub fn viewport_for_scene(&self, scene: Vec2) -> ViewportLayout {
        let size = Vec2::new(
            2.0f32.mul_add(-self.horizontal_margin, scene.x),
            scene.y * self.viewport_height_ratio,
        );
        let center = Vec2::new(0.0, (size.y - scene.y) / 2.0 + self.horizontal_margin);
        ViewportLayout { size, center }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_scene_layout() {
        let layout = InventoryConfig::default().viewport_for_scene(Vec2::new(360.0, 640.0));

        assert!(layout.size.abs_diff_eq(Vec2::new(320.0, 352.0), 1e-4));
        // bottom edge sits 20 points above the scene bottom at -320
        assert!((layout.center.y - layout.size.y / 2.0 - -300.0).abs() < 1e-4);
        assert_eq!(layout.to_local(layout.center), Vec2::ZERO);
    }
}
