//! Stateless components. Each one builds an [`Element`] tree from its
//! props and paints it; none keeps memory between frames.

mod day_menu;
mod day_selector;
pub mod element;
mod icon_button;
mod pagination_indicator;
pub mod painter;

pub use day_menu::{DayMenu, MENU_TITLE};
pub use day_selector::{chevron_icon, DaySelectorButton};
pub use element::{Attributes, Element};
pub use icon_button::{
    IconButton, IconButtonConfig, StyleOverride, BUTTON_SIZE, DEFAULT_BACKGROUND,
    DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE,
};
pub use pagination_indicator::PaginationIndicator;
