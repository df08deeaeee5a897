use bevy::color::palettes::css::GOLD;
use bevy::prelude::*;
use looter_helpers::input::just_released_world_position;
use looter_helpers::screen::despawn_screen;
use strum::IntoEnumIterator;

use crate::scene::{AppScene, MenuEntry};

pub struct MenuPlugin;

const LOGO_Y: f32 = 180.0;
const FIRST_ENTRY_Y: f32 = 70.0;
const ENTRY_SPACING: f32 = 70.0;
const ENTRY_HALF_WIDTH: f32 = 110.0;

/// Component marker for menu entities
#[derive(Component)]
struct MenuScreen;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppScene::Menu), spawn_menu)
            .add_systems(Update, handle_menu_input.run_if(in_state(AppScene::Menu)))
            .add_systems(OnExit(AppScene::Menu), despawn_screen::<MenuScreen>);
    }
}

fn entry_y(index: usize) -> f32 {
    (index as f32).mul_add(-ENTRY_SPACING, FIRST_ENTRY_Y)
}

/// Menu entry whose row contains `point`, in world coordinates.
fn entry_at(point: Vec2) -> Option<MenuEntry> {
    if point.x.abs() > ENTRY_HALF_WIDTH {
        return None;
    }
    MenuEntry::iter()
        .enumerate()
        .find(|(index, _)| (point.y - entry_y(*index)).abs() <= ENTRY_SPACING / 2.0)
        .map(|(_, entry)| entry)
}

fn spawn_menu(mut commands: Commands) {
    let entry_font = TextFont {
        font_size: 32.0,
        ..default()
    };

    commands
        .spawn((MenuScreen, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new("TarkovAFK"),
                entry_font.clone().with_font_size(52.0),
                TextLayout::new_with_justify(JustifyText::Center),
                TextColor(Color::Srgba(GOLD)),
                Transform::from_translation(Vec3::new(0.0, LOGO_Y, 0.0)),
            ));

            for (index, entry) in MenuEntry::iter().enumerate() {
                parent.spawn((
                    Text2d::new(entry.to_string()),
                    entry_font.clone(),
                    TextLayout::new_with_justify(JustifyText::Center),
                    Transform::from_translation(Vec3::new(0.0, entry_y(index), 0.0)),
                ));
            }
        });
}

fn handle_menu_input(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut next_state: ResMut<NextState<AppScene>>,
) {
    let Some(point) = just_released_world_position(&buttons, &touch_input, &windows, &camera_q)
    else {
        return;
    };

    if let Some(entry) = entry_at(point) {
        info!("Opening {entry}");
        next_state.set(entry.destination());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_stacked_under_the_logo() {
        assert_eq!(entry_at(Vec2::new(0.0, 70.0)), Some(MenuEntry::Escape));
        assert_eq!(entry_at(Vec2::new(-40.0, 10.0)), Some(MenuEntry::Trading));
        assert_eq!(entry_at(Vec2::new(60.0, -70.0)), Some(MenuEntry::Inventory));
        assert_eq!(entry_at(Vec2::new(0.0, -150.0)), Some(MenuEntry::Hideout));
    }

    #[test]
    fn taps_outside_the_entries_do_nothing() {
        assert_eq!(entry_at(Vec2::new(0.0, LOGO_Y)), None);
        assert_eq!(entry_at(Vec2::new(0.0, -250.0)), None);
        assert_eq!(entry_at(Vec2::new(150.0, 70.0)), None);
    }
}
