use bevy::prelude::*;
use inventory_grid::{GridPosition, InventoryConfig, InventoryEngine, ItemId, ViewportLayout};

#[derive(Resource, Default)]
pub struct InventorySettings(pub InventoryConfig);

/// The open stash. Only exists while the inventory scene is active.
#[derive(Resource)]
pub struct InventorySession {
    pub engine: InventoryEngine,
    pub layout: ViewportLayout,
}

impl InventorySession {
    /// Whether a press at `scene_point` lands on the grid rather than the scene around it.
    pub fn claims(&self, scene_point: Vec2) -> bool {
        self.engine
            .viewport_contains(self.layout.to_local(scene_point))
    }
}

/// Component marker for every inventory scene entity
#[derive(Component)]
pub struct InventoryScreen;

/// Parent of everything that scrolls with the grid.
#[derive(Component)]
pub struct GridContent;

#[derive(Component)]
pub struct CellOutline(pub GridPosition);

#[derive(Component)]
pub struct ItemSprite(pub ItemId);

#[derive(Component)]
pub struct PreviewCell;

pub const CELL_GAP: f32 = 2.0;
pub const CELL_STROKE_WIDTH: f32 = 1.5;

pub const CELL_STROKE: Color = Color::srgb(94.0 / 255.0, 103.0 / 255.0, 115.0 / 255.0);
pub const CELL_FILL: Color = Color::srgb(63.0 / 255.0, 69.0 / 255.0, 80.0 / 255.0);
pub const ITEM_COLOR: Color = Color::srgb(0.45, 0.40, 0.30);
pub const ITEM_SELECTED_COLOR: Color = Color::srgb(0.62, 0.55, 0.36);
pub const ITEM_DRAGGING_COLOR: Color = Color::srgba(0.70, 0.62, 0.40, 0.85);
pub const ITEM_LABEL_COLOR: Color = Color::srgb(0.92, 0.90, 0.85);
pub const PREVIEW_VALID: Color = Color::srgba(0.20, 0.80, 0.30, 0.45);
pub const PREVIEW_INVALID: Color = Color::srgba(0.85, 0.20, 0.20, 0.45);

// Local to the grid content
pub const CELL_Z: f32 = 0.0;
pub const PREVIEW_Z: f32 = 0.5;
pub const ITEM_Z: f32 = 1.0;
pub const DRAGGING_ITEM_Z: f32 = 5.0;

pub const MASK_Z: f32 = 10.0;
