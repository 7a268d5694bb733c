pub mod board;
pub mod coordinate;
pub mod models;
pub mod occupancy;
pub mod rules;
pub mod setup;
