pub mod models;
pub mod seasons;
pub mod weapons;
