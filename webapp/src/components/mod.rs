pub mod icons;
pub mod navigation;
pub mod search_bar;
