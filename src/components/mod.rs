pub mod footer;
pub mod header;
pub mod helpers;
pub mod page;
pub mod search_bar;
pub mod search_panel;
