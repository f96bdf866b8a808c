// Service module exports

pub mod day_options;
pub mod settings;
