pub mod neon_background;

pub use neon_background::NeonBackground;
