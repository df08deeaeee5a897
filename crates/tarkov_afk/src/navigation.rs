use bevy::prelude::*;
use looter_helpers::gesture::{EdgeSwipe, EdgeSwipeState};
use looter_helpers::input::{
    just_pressed_screen_position, just_released_screen_position, just_released_world_position,
    screen_to_world,
};
use looter_helpers::screen::despawn_screen;

use crate::inventory::InventorySession;
use crate::scene::AppScene;

/// Back arrow and left edge swipe, both returning to the menu from any other scene.
pub struct NavigationPlugin;

const ARROW_INSET: Vec2 = Vec2::new(28.0, 36.0);
const ARROW_HIT_RADIUS: f32 = 28.0;
// Drawn above the inventory masks.
const ARROW_Z: f32 = 20.0;

#[derive(Component)]
struct BackArrow;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EdgeSwipeState>()
            .add_systems(OnExit(AppScene::Menu), (spawn_back_arrow, reset_swipe))
            .add_systems(OnEnter(AppScene::Menu), despawn_screen::<BackArrow>)
            .add_systems(
                Update,
                (handle_back_arrow, handle_edge_swipe).run_if(not(in_state(AppScene::Menu))),
            );
    }
}

/// Arrow centre in world coordinates for a scene of `scene` size centred on the camera.
fn back_arrow_position(scene: Vec2) -> Vec2 {
    Vec2::new(-scene.x / 2.0, scene.y / 2.0) + Vec2::new(ARROW_INSET.x, -ARROW_INSET.y)
}

fn hits_back_arrow(scene: Vec2, point: Vec2) -> bool {
    point.distance(back_arrow_position(scene)) <= ARROW_HIT_RADIUS
}

/// A press opens a swipe only near the left edge and only when the grid
/// did not take it for a drag or scroll.
fn swipe_start(swipe: &EdgeSwipe, start: Vec2, claimed: bool) -> Option<Vec2> {
    (!claimed && swipe.starts_at(start)).then_some(start)
}

fn scene_size(windows: &Query<&Window>) -> Option<Vec2> {
    windows.get_single().ok().map(Window::size)
}

fn spawn_back_arrow(mut commands: Commands, windows: Query<&Window>) {
    let Some(scene) = scene_size(&windows) else {
        return;
    };

    commands.spawn((
        BackArrow,
        Text2d::new("<"),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        Transform::from_translation(back_arrow_position(scene).extend(ARROW_Z)),
    ));
}

fn reset_swipe(mut swipe: ResMut<EdgeSwipeState>) {
    swipe.start = None;
}

fn handle_back_arrow(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut next_state: ResMut<NextState<AppScene>>,
) {
    let Some(scene) = scene_size(&windows) else {
        return;
    };
    let Some(point) = just_released_world_position(&buttons, &touch_input, &windows, &camera_q)
    else {
        return;
    };

    if hits_back_arrow(scene, point) {
        next_state.set(AppScene::Menu);
    }
}

fn handle_edge_swipe(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    session: Option<Res<InventorySession>>,
    mut swipe_state: ResMut<EdgeSwipeState>,
    mut next_state: ResMut<NextState<AppScene>>,
) {
    let swipe = EdgeSwipe::default();

    if let Some(start) = just_pressed_screen_position(&buttons, &touch_input, &windows) {
        let claimed = session.as_ref().is_some_and(|session| {
            screen_to_world(&camera_q, start).is_some_and(|point| session.claims(point))
        });
        swipe_state.start = swipe_start(&swipe, start, claimed);
    }

    if let Some(end) = just_released_screen_position(&buttons, &touch_input, &windows) {
        if let Some(start) = swipe_state.start.take() {
            if swipe.recognizes(start, end) {
                debug!("Edge swipe from {start} to {end}");
                next_state.set(AppScene::Menu);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use inventory_grid::{InventoryConfig, InventoryEngine};

    use super::*;

    const SCENE: Vec2 = Vec2::new(360.0, 640.0);

    #[test]
    fn arrow_sits_in_the_top_left_corner() {
        assert_eq!(back_arrow_position(SCENE), Vec2::new(-152.0, 284.0));
    }

    #[test]
    fn arrow_taps() {
        assert!(hits_back_arrow(SCENE, Vec2::new(-150.0, 290.0)));
        assert!(!hits_back_arrow(SCENE, Vec2::new(0.0, 284.0)));
        assert!(!hits_back_arrow(SCENE, Vec2::new(-152.0, 200.0)));
    }

    /// Camera at the origin: screen x grows right from the left edge, y grows down.
    fn screen_to_scene(screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - SCENE.x / 2.0, SCENE.y / 2.0 - screen.y)
    }

    fn open_inventory() -> InventorySession {
        let config = InventoryConfig::default();
        let layout = config.viewport_for_scene(SCENE);
        let engine =
            InventoryEngine::with_starter_loadout(&config, layout.size).expect("loadout fits");
        InventorySession { engine, layout }
    }

    #[test]
    fn dragging_from_the_first_column_is_not_a_back_swipe() {
        let session = open_inventory();
        let swipe = EdgeSwipe::default();
        // On the water bottle in column 0, close enough to the edge for a swipe.
        let press = Vec2::new(30.0, 281.0);
        let release = Vec2::new(95.0, 281.0);
        assert!(swipe.recognizes(press, release), "gesture shape alone is a swipe");

        let claimed = session.claims(screen_to_scene(press));
        assert!(claimed, "press lands inside the grid viewport");
        assert_eq!(swipe_start(&swipe, press, claimed), None);
    }

    #[test]
    fn edge_swipe_outside_the_grid_still_goes_back() {
        let session = open_inventory();
        let swipe = EdgeSwipe::default();
        let beside_grid = Vec2::new(10.0, 281.0);
        let above_grid = Vec2::new(30.0, 100.0);

        for press in [beside_grid, above_grid] {
            let claimed = session.claims(screen_to_scene(press));
            assert!(!claimed, "{press} is outside the grid viewport");
            assert_eq!(swipe_start(&swipe, press, claimed), Some(press));
        }
    }
}
