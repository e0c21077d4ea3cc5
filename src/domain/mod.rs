pub mod defaults;
pub mod models;
