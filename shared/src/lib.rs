pub mod config;
pub mod constants;
pub mod shared_wheel_game;
pub mod wheel_geometry;
