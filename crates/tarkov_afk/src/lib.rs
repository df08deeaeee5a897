use bevy::prelude::*;

mod inventory;
mod menu;
mod navigation;
mod placeholder;
mod scene;

use inventory::InventoryPlugin;
use menu::MenuPlugin;
use navigation::NavigationPlugin;
use placeholder::PlaceholderPlugin;
use scene::AppScene;

pub fn run() {
    looter_helpers::get_default_app("TarkovAFK")
        .add_plugins(MenuPlugin)
        .add_plugins(PlaceholderPlugin)
        .add_plugins(NavigationPlugin)
        .add_plugins(InventoryPlugin)
        .init_state::<AppScene>()
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
