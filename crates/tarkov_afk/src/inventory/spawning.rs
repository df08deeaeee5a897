use bevy::prelude::*;
use bevy::text::TextBounds;
use inventory_grid::{InventoryEngine, ItemView, ViewportLayout};
use looter_helpers::BACKGROUND;

use super::components::*;
use crate::scene::AppScene;

pub fn open_inventory(
    mut commands: Commands,
    windows: Query<&Window>,
    settings: Res<InventorySettings>,
    mut next_state: ResMut<NextState<AppScene>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let layout = settings.0.viewport_for_scene(window.size());
    match InventoryEngine::with_starter_loadout(&settings.0, layout.size) {
        Ok(engine) => commands.insert_resource(InventorySession { engine, layout }),
        Err(err) => {
            error!("Cannot open the inventory: {err}");
            next_state.set(AppScene::Menu);
        }
    }
}

pub fn close_inventory(mut commands: Commands) {
    commands.remove_resource::<InventorySession>();
}

pub fn spawn_inventory_view(
    mut commands: Commands,
    windows: Query<&Window>,
    session: Option<Res<InventorySession>>,
) {
    let (Some(session), Ok(window)) = (session, windows.get_single()) else {
        return;
    };
    let engine = &session.engine;
    let layout = session.layout;
    let cell_size = engine.grid().cell_size();

    let content_origin = Vec3::new(
        layout.center.x,
        layout.center.y + engine.scroll_offset(),
        0.0,
    );

    commands
        .spawn((
            InventoryScreen,
            GridContent,
            Transform::from_translation(content_origin),
            Visibility::default(),
        ))
        .with_children(|content| {
            let outline_size = Vec2::splat(cell_size - CELL_GAP);
            let fill_size = Vec2::splat(2.0f32.mul_add(-CELL_STROKE_WIDTH, cell_size - CELL_GAP));

            for cell in engine.cell_views() {
                content.spawn((
                    CellOutline(cell.position),
                    Sprite::from_color(CELL_STROKE, outline_size),
                    Transform::from_translation(cell.center.extend(CELL_Z)),
                    if cell.outline_hidden {
                        Visibility::Hidden
                    } else {
                        Visibility::Inherited
                    },
                ));
                content.spawn((
                    Sprite::from_color(CELL_FILL, fill_size),
                    Transform::from_translation(cell.center.extend(CELL_Z + 0.1)),
                ));
            }

            for item in engine.item_views() {
                let size = item_extent(&item, cell_size);
                content
                    .spawn((
                        ItemSprite(item.id),
                        Sprite::from_color(item_color(&item), size),
                        Transform::from_translation(item.center.extend(ITEM_Z)),
                    ))
                    .with_children(|parent| {
                        parent.spawn((
                            Text2d::new(item.name),
                            TextFont {
                                font_size: 9.0,
                                ..default()
                            },
                            TextColor(ITEM_LABEL_COLOR),
                            TextLayout::new(JustifyText::Center, LineBreak::WordBoundary),
                            TextBounds::new_horizontal(size.x),
                            Transform::from_xyz(0.0, 0.0, 0.1),
                        ));
                    });
            }
        });

    for panel in mask_panels(window.size(), &layout) {
        commands.spawn((
            InventoryScreen,
            Sprite::from_color(BACKGROUND, panel.size()),
            Transform::from_translation(panel.center().extend(MASK_Z)),
        ));
    }
}

pub fn item_extent(item: &ItemView<'_>, cell_size: f32) -> Vec2 {
    Vec2::new(
        item.size.width as f32 * cell_size,
        item.size.height as f32 * cell_size,
    ) - CELL_GAP
}

pub const fn item_color(item: &ItemView<'_>) -> Color {
    if item.dragging {
        ITEM_DRAGGING_COLOR
    } else if item.selected {
        ITEM_SELECTED_COLOR
    } else {
        ITEM_COLOR
    }
}

/// Opaque panels covering the scene everywhere outside the viewport:
/// above, below, left and right of it.
fn mask_panels(scene: Vec2, layout: &ViewportLayout) -> [Rect; 4] {
    let half_scene = scene / 2.0;
    let viewport = Rect::from_center_size(layout.center, layout.size);

    [
        Rect::new(-half_scene.x, viewport.max.y, half_scene.x, half_scene.y),
        Rect::new(-half_scene.x, -half_scene.y, half_scene.x, viewport.min.y),
        Rect::new(-half_scene.x, viewport.min.y, viewport.min.x, viewport.max.y),
        Rect::new(viewport.max.x, viewport.min.y, half_scene.x, viewport.max.y),
    ]
}

#[cfg(test)]
mod tests {
    use inventory_grid::InventoryConfig;

    use super::*;

    const SCENE: Vec2 = Vec2::new(360.0, 640.0);

    #[test]
    fn masks_cover_everything_but_the_viewport() {
        let layout = InventoryConfig::default().viewport_for_scene(SCENE);
        let panels = mask_panels(SCENE, &layout);

        let masked: f32 = panels.iter().map(|panel| panel.size().x * panel.size().y).sum();
        let expected = SCENE.x.mul_add(SCENE.y, -(layout.size.x * layout.size.y));
        assert!((masked - expected).abs() < 1.0, "{masked} != {expected}");

        let viewport = Rect::from_center_size(layout.center, layout.size);
        for panel in panels {
            assert!(
                panel.intersect(viewport).is_empty(),
                "{panel:?} overlaps the viewport"
            );
        }
    }

    #[test]
    fn bottom_mask_is_one_margin_tall() {
        let layout = InventoryConfig::default().viewport_for_scene(SCENE);
        let [_, bottom, left, _] = mask_panels(SCENE, &layout);
        assert!((bottom.height() - 20.0).abs() < 1e-3, "{bottom:?}");
        assert!((left.width() - 20.0).abs() < 1e-3, "{left:?}");
    }
}
