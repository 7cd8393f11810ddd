pub mod navigation;
pub mod overlay;
pub mod search;
pub mod selection;
