use bevy::prelude::*;
use looter_helpers::screen::despawn_screen;

mod components;
mod input;
mod render;
mod spawning;

pub use components::InventorySession;
use components::{InventoryScreen, InventorySettings};
use input::{advance_scroll, handle_pointer};
use render::{scroll_content, update_cell_outlines, update_items, update_preview};
use spawning::{close_inventory, open_inventory, spawn_inventory_view};

use crate::scene::AppScene;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventorySettings>()
            .add_systems(
                OnEnter(AppScene::Inventory),
                (open_inventory, spawn_inventory_view).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_pointer,
                    advance_scroll,
                    scroll_content,
                    update_cell_outlines,
                    update_items,
                    update_preview,
                )
                    .chain()
                    .run_if(in_state(AppScene::Inventory).and(resource_exists::<InventorySession>)),
            )
            .add_systems(
                OnExit(AppScene::Inventory),
                (despawn_screen::<InventoryScreen>, close_inventory),
            );
    }
}
