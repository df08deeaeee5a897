use std::fmt::{self, Display, Formatter};

use crate::grid::{GridPosition, GridSize};

/// Stable handle of an item inside an [`ItemSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to create when the inventory opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub size: GridSize,
    pub position: GridPosition,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, size: GridSize, position: GridPosition) -> Self {
        Self {
            name: name.into(),
            size,
            position,
        }
    }
}

/// An item resting in (or being dragged over) the grid.
///
/// The footprint size never changes after creation. The position only moves
/// when a drag commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    size: GridSize,
    position: GridPosition,
    selected: bool,
    dragging: bool,
}

impl Item {
    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    pub const fn position(&self) -> GridPosition {
        self.position
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) const fn set_position(&mut self, position: GridPosition) {
        self.position = position;
    }

    pub(crate) const fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}

/// Owns every item of an inventory session. Ids are indices and are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn insert(&mut self, spec: ItemSpec) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(Item {
            id,
            name: spec.name,
            size: spec.size,
            position: spec.position,
            selected: false,
            dragging: false,
        });
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0 as usize)
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.items.iter().find(|item| item.selected).map(Item::id)
    }

    /// Highlights `id` and drops the highlight from everything else.
    pub(crate) fn select(&mut self, id: ItemId) {
        for item in &mut self.items {
            item.selected = item.id == id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> ItemSpec {
        ItemSpec::new(name, GridSize::ONE, GridPosition::default())
    }

    #[test]
    fn ids_are_assigned_in_insertion_order() {
        let mut items = ItemSet::default();
        let first = items.insert(spec("Tushonka"));
        let second = items.insert(spec("Condensed milk"));

        assert_eq!(first, ItemId(0));
        assert_eq!(second, ItemId(1));
        assert_eq!(items.get(second).map(Item::name), Some("Condensed milk"));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut items = ItemSet::default();
        let first = items.insert(spec("Tushonka"));
        let second = items.insert(spec("Condensed milk"));

        items.select(first);
        assert_eq!(items.selected(), Some(first));

        items.select(second);
        assert_eq!(items.selected(), Some(second));
        assert!(!items.get(first).is_some_and(Item::is_selected));
    }

    #[test]
    fn unknown_id_is_absent() {
        let items = ItemSet::default();
        assert!(items.get(ItemId(7)).is_none());
        assert!(items.is_empty());
    }
}
