use bevy::prelude::*;
use inventory_grid::{DropPreview, GridSize};

use super::components::*;
use super::spawning::item_color;

pub fn scroll_content(
    session: Res<InventorySession>,
    mut content: Query<&mut Transform, With<GridContent>>,
) {
    let y = session.layout.center.y + session.engine.scroll_offset();
    for mut transform in &mut content {
        transform.translation.y = y;
    }
}

/// Occupied cells lose their outline so items read as one piece.
pub fn update_cell_outlines(
    session: Res<InventorySession>,
    mut outlines: Query<(&CellOutline, &mut Visibility)>,
) {
    let grid = session.engine.grid();
    for (outline, mut visibility) in &mut outlines {
        let wanted = if grid.occupant(outline.0).is_some() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(wanted);
    }
}

pub fn update_items(
    session: Res<InventorySession>,
    mut sprites: Query<(&ItemSprite, &mut Transform, &mut Sprite)>,
) {
    for view in session.engine.item_views() {
        let Some((_, mut transform, mut sprite)) = sprites
            .iter_mut()
            .find(|(item, ..)| item.0 == view.id)
        else {
            continue;
        };

        let z = if view.dragging { DRAGGING_ITEM_Z } else { ITEM_Z };
        transform.translation = view.center.extend(z);
        sprite.color = item_color(&view);
    }
}

/// Rebuilds the tinted drop cells whenever the candidate or its validity changes.
pub fn update_preview(
    mut commands: Commands,
    session: Res<InventorySession>,
    content: Query<Entity, With<GridContent>>,
    cells: Query<Entity, With<PreviewCell>>,
    mut shown: Local<Option<DropPreview>>,
) {
    let preview = session.engine.drop_preview();
    if preview == *shown {
        return;
    }
    *shown = preview;

    for entity in &cells {
        commands.entity(entity).despawn_recursive();
    }

    let (Some(preview), Ok(content)) = (preview, content.get_single()) else {
        return;
    };
    let grid = session.engine.grid();
    let color = if preview.valid {
        PREVIEW_VALID
    } else {
        PREVIEW_INVALID
    };
    let size = Vec2::splat(grid.cell_size() - CELL_GAP);

    commands.entity(content).with_children(|parent| {
        for cell in preview.cells() {
            parent.spawn((
                PreviewCell,
                Sprite::from_color(color, size),
                Transform::from_translation(grid.cell_center(cell, GridSize::ONE).extend(PREVIEW_Z)),
            ));
        }
    });
}
