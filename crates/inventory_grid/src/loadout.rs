use crate::grid::{GridPosition, GridSize};
use crate::item::ItemSpec;

/// Provisions every fresh stash opens with.
const STARTER_LOADOUT: &[(&str, (u32, u32), (i32, i32))] = &[
    ("Water bottle", (1, 2), (0, 0)),
    ("Tushonka", (1, 1), (1, 0)),
    ("Condensed milk", (1, 1), (2, 0)),
    ("Iskra ration pack", (1, 2), (3, 0)),
    ("Army crackers", (1, 1), (4, 0)),
    ("Emelya rye croutons", (1, 1), (5, 0)),
    ("MRE ration pack", (1, 2), (0, 2)),
    ("Grizzly medical kit", (2, 2), (6, 2)),
    ("Aquamari water", (1, 2), (9, 0)),
    ("Pevko Light beer", (1, 2), (10, 0)),
];

pub fn starter_loadout() -> Vec<ItemSpec> {
    STARTER_LOADOUT
        .iter()
        .map(|&(name, (width, height), (column, row))| {
            ItemSpec::new(
                name,
                GridSize::new(width, height),
                GridPosition::new(column, row),
            )
        })
        .collect()
}
