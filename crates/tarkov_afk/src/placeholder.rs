use bevy::prelude::*;
use looter_helpers::screen::despawn_screen;
use strum::IntoEnumIterator;

use crate::scene::{AppScene, MenuEntry};

/// Title screens for menu entries that have no content yet.
pub struct PlaceholderPlugin;

#[derive(Component)]
struct PlaceholderScreen;

impl Plugin for PlaceholderPlugin {
    fn build(&self, app: &mut App) {
        for entry in MenuEntry::iter() {
            let AppScene::Placeholder(entry) = entry.destination() else {
                continue;
            };
            app.add_systems(
                OnEnter(AppScene::Placeholder(entry)),
                move |commands: Commands| spawn_placeholder(commands, entry),
            )
            .add_systems(
                OnExit(AppScene::Placeholder(entry)),
                despawn_screen::<PlaceholderScreen>,
            );
        }
    }
}

fn spawn_placeholder(mut commands: Commands, entry: MenuEntry) {
    commands.spawn((
        PlaceholderScreen,
        Text2d::new(entry.to_string()),
        TextFont {
            font_size: 44.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::default(),
    ));
}
