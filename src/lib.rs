pub mod active_orders;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod ingredient;
pub mod kitchen;
pub mod level;
pub mod order;
pub mod order_manager;
pub mod recipe;
pub mod recipe_library;
pub mod recipe_reader;
pub mod statistics;
