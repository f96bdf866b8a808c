mod app;
pub mod components;
pub mod icons;
pub mod theme;

pub use app::{GalleryAction, GalleryApp, GalleryState};
