// Module exports for models

pub mod day_selection;
pub mod pagination;
pub mod settings;
