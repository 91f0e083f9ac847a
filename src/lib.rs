pub mod args;
pub mod commands;
pub mod database;
pub mod media;
pub mod model;
pub mod render;
pub mod utils;
