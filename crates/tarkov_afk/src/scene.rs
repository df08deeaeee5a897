use bevy::prelude::*;
use strum::{Display, EnumIter};

/// Top level screens of the client.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum AppScene {
    #[default]
    Menu,
    Inventory,
    /// Screens that exist in the menu but have no content yet.
    Placeholder(MenuEntry),
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Display, EnumIter)]
pub enum MenuEntry {
    Escape,
    Trading,
    Inventory,
    Hideout,
}

impl MenuEntry {
    pub const fn destination(self) -> AppScene {
        match self {
            Self::Inventory => AppScene::Inventory,
            entry => AppScene::Placeholder(entry),
        }
    }
}
