use bevy::prelude::*;
use bevy::input::touch::Touch;
use bevy::window::WindowFocused;
use inventory_grid::{DropOutcome, InventoryEngine, ViewportLayout};
use looter_helpers::input::{cursor_world_position, screen_to_world};
use looter_helpers::pointer::{PointerEvent, PointerId, PointerTracker};

use super::components::InventorySession;

/// Maps the mouse or the touch that opened the gesture onto the engine's
/// pointer events. Other touches are ignored until that one lifts.
pub fn handle_pointer(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    time: Res<Time>,
    mut focus_events: EventReader<WindowFocused>,
    mut session: ResMut<InventorySession>,
    mut tracker: Local<PointerTracker>,
) {
    let now = time.elapsed_secs_f64();
    let InventorySession { engine, layout } = &mut *session;
    let mut forward = |event: Option<PointerEvent>| {
        if let Some(event) = event {
            apply(engine, layout, event, now);
        }
    };

    if focus_events.read().any(|event| !event.focused) {
        forward(tracker.lose());
        return;
    }

    for touch in touch_input.iter_just_canceled() {
        forward(tracker.cancel(PointerId::Touch(touch.id())));
    }

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(point) = cursor_world_position(&windows, &camera_q) {
            forward(tracker.press(PointerId::Mouse, point));
        }
    }
    for touch in touch_input.iter_just_pressed() {
        if let Some(point) = screen_to_world(&camera_q, touch.position()) {
            forward(tracker.press(PointerId::Touch(touch.id()), point));
        }
    }

    match tracker.active() {
        Some(PointerId::Mouse) => match cursor_world_position(&windows, &camera_q) {
            Some(point) if buttons.just_released(MouseButton::Left) => {
                forward(tracker.release(PointerId::Mouse, point));
            }
            Some(point) if buttons.pressed(MouseButton::Left) => {
                forward(tracker.hold(PointerId::Mouse, point));
            }
            // Released or held somewhere we could not see, e.g. outside the window.
            _ => forward(tracker.lose()),
        },
        Some(id @ PointerId::Touch(touch_id)) => {
            let world = |touch: &Touch| screen_to_world(&camera_q, touch.position());
            if let Some(point) = touch_input.get_released(touch_id).and_then(world) {
                forward(tracker.release(id, point));
            } else if let Some(point) = touch_input.get_pressed(touch_id).and_then(world) {
                forward(tracker.hold(id, point));
            } else {
                forward(tracker.lose());
            }
        }
        None => {}
    }
}

pub fn advance_scroll(time: Res<Time>, mut session: ResMut<InventorySession>) {
    session.engine.update(time.elapsed_secs_f64());
}

/// Feeds one scene-space pointer event to the engine.
fn apply(engine: &mut InventoryEngine, layout: &ViewportLayout, event: PointerEvent, now: f64) {
    match event {
        PointerEvent::Down(point) => engine.pointer_down(layout.to_local(point), now),
        PointerEvent::Move(point) => engine.pointer_move(layout.to_local(point), now),
        PointerEvent::Up(point) => report(engine.pointer_up(layout.to_local(point), now)),
        PointerEvent::Cancel => report(engine.pointer_cancel()),
    }
}

fn report(outcome: Option<DropOutcome>) {
    match outcome {
        Some(DropOutcome::Committed { item, from, to }) => {
            info!("Moved {item} from {from} to {to}");
        }
        Some(DropOutcome::Reverted { item, to }) => info!("Returned {item} to {to}"),
        None => {}
    }
}
