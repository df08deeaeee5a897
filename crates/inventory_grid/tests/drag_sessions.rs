use bevy_math::Vec2;
use inventory_grid::{
    GridPosition, GridSize, InventoryConfig, InventoryEngine, ItemId, ItemSpec, can_place,
    starter_loadout,
};

/// 30 point cells; 0.55 of a 640 point scene.
const VIEWPORT: Vec2 = Vec2::new(360.0, 352.0);

fn open(loadout: Vec<ItemSpec>) -> InventoryEngine {
    InventoryEngine::new(&InventoryConfig::default(), VIEWPORT, loadout).expect("loadout fits")
}

fn viewport_point(engine: &InventoryEngine, position: GridPosition, size: GridSize) -> Vec2 {
    engine.grid().cell_center(position, size) + Vec2::new(0.0, engine.scroll_offset())
}

/// Full down/move/up session dragging `item` so its anchor snaps onto `target`.
fn drag(engine: &mut InventoryEngine, item: ItemId, target: GridPosition, time: f64) {
    let (position, size) = {
        let item = engine.item(item).expect("known item");
        (item.position(), item.size())
    };
    let from = viewport_point(engine, position, size);
    let to = viewport_point(engine, target, size);

    engine.pointer_down(from, time);
    engine.pointer_move(from.lerp(to, 0.5), time + 0.05);
    engine.pointer_move(to, time + 0.1);
    engine.pointer_up(to, time + 0.15);
}

fn assert_quiescent_invariants(engine: &InventoryEngine) {
    assert!(engine.is_quiescent());
    let grid = engine.grid();
    for item in engine.items().iter() {
        let position = item.position();
        let size = item.size();
        assert!(position.column >= 0 && position.row >= 0, "{position} is negative");
        assert!(position.column as u32 + size.width <= grid.columns());
        assert!(position.row as u32 + size.height <= grid.rows());

        let mut expected: Vec<_> = position.footprint(size).collect();
        let mut actual: Vec<_> = grid.cells_of(item.id()).collect();
        expected.sort_by_key(|cell| (cell.row, cell.column));
        actual.sort_by_key(|cell| (cell.row, cell.column));
        assert_eq!(actual, expected, "{} does not cover its footprint", item.name());
    }

    let occupied = grid.cells().filter(|(_, owner)| owner.is_some()).count();
    let declared: u32 = engine.items().iter().map(|item| item.size().area()).sum();
    assert_eq!(occupied as u32, declared, "footprints overlap");
}

#[test]
fn concrete_scenario_from_the_stash() {
    let engine = open(vec![
        ItemSpec::new("Grizzly medical kit", GridSize::new(2, 2), GridPosition::new(6, 2)),
        ItemSpec::new("Tushonka", GridSize::ONE, GridPosition::new(0, 0)),
    ]);
    assert!((engine.grid().cell_size() - 30.0).abs() < f32::EPSILON);

    let tushonka = engine.item(ItemId(1)).expect("known item");
    assert!(!can_place(engine.grid(), tushonka, GridPosition::new(6, 2)));
    assert!(can_place(engine.grid(), tushonka, GridPosition::new(8, 2)));
}

#[test]
fn single_cell_commit_marks_exactly_one_cell() {
    let mut engine = open(vec![ItemSpec::new("Tushonka", GridSize::ONE, GridPosition::new(0, 0))]);

    drag(&mut engine, ItemId(0), GridPosition::new(3, 4), 0.0);

    assert_eq!(
        engine.grid().cells_of(ItemId(0)).collect::<Vec<_>>(),
        vec![GridPosition::new(3, 4)]
    );
    assert_quiescent_invariants(&engine);
}

#[test]
fn blocked_drop_returns_to_origin() {
    let mut engine = open(vec![
        ItemSpec::new("Grizzly medical kit", GridSize::new(2, 2), GridPosition::new(6, 2)),
        ItemSpec::new("Water bottle", GridSize::new(1, 2), GridPosition::new(0, 0)),
    ]);

    drag(&mut engine, ItemId(1), GridPosition::new(7, 2), 0.0);

    assert_eq!(
        engine.item(ItemId(1)).map(|item| item.position()),
        Some(GridPosition::new(0, 0))
    );
    assert_quiescent_invariants(&engine);
}

#[test]
fn cancel_restores_everything() {
    let mut engine = open(starter_loadout());
    let before = engine.grid().clone();
    let item = ItemId(7);
    let (position, size) = {
        let item = engine.item(item).expect("known item");
        (item.position(), item.size())
    };

    let from = viewport_point(&engine, position, size);
    engine.pointer_down(from, 0.0);
    engine.pointer_move(from + Vec2::new(60.0, -90.0), 0.1);
    assert!(engine.drop_preview().is_some());

    let outcome = engine.pointer_cancel().expect("drag was open");
    assert!(!outcome.is_committed());
    assert!(engine.drop_preview().is_none());
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.item(item).map(|item| item.position()), Some(position));
}

#[test]
fn many_sessions_never_overlap() {
    let mut engine = open(starter_loadout());
    let targets = [
        (ItemId(7), GridPosition::new(0, 0)),
        (ItemId(7), GridPosition::new(1, 1)),
        (ItemId(0), GridPosition::new(1, 1)),
        (ItemId(0), GridPosition::new(11, 5)),
        (ItemId(3), GridPosition::new(10, 1)),
        (ItemId(5), GridPosition::new(6, 3)),
        (ItemId(7), GridPosition::new(4, 4)),
        (ItemId(1), GridPosition::new(5, 5)),
        (ItemId(8), GridPosition::new(11, 4)),
        (ItemId(6), GridPosition::new(4, 3)),
    ];

    for (index, (item, target)) in targets.into_iter().enumerate() {
        drag(&mut engine, item, target, index as f64);
        assert_quiescent_invariants(&engine);
    }
}

#[test]
fn scroll_offset_stays_inside_bounds() {
    let mut engine = open(Vec::new());
    let bounds = engine.scroll().bounds();
    let deltas: [f32; 6] = [250.0, 900.0, -3000.0, 4000.0, 12.5, -80.0];

    let mut time = 0.0;
    for delta in deltas {
        engine.pointer_down(Vec2::new(0.0, 0.0), time);
        engine.pointer_move(Vec2::new(0.0, delta.clamp(-170.0, 170.0)), time + 0.01);
        engine.pointer_up(Vec2::new(0.0, delta.clamp(-170.0, 170.0)), time + 0.01);
        for _ in 0..400 {
            time += 1.0 / 60.0;
            engine.update(time);
            assert!(bounds.contains(engine.scroll_offset()));
        }
        time += 1.0;
    }
}

#[test]
fn fling_settles() {
    let mut engine = open(Vec::new());
    engine.pointer_down(Vec2::new(0.0, -50.0), 0.0);
    engine.pointer_move(Vec2::new(0.0, -30.0), 0.02);
    engine.pointer_up(Vec2::new(0.0, -30.0), 0.02);
    assert!(engine.scroll().is_decelerating());

    let mut time = 0.02;
    let mut frames = 0;
    while engine.scroll().is_decelerating() {
        time += 1.0 / 60.0;
        engine.update(time);
        frames += 1;
        assert!(frames <= 300, "fling did not settle");
    }
    assert!(engine.scroll().velocity().abs() < f32::EPSILON);
}
