pub mod use_wheel_game;

pub use use_wheel_game::*;
