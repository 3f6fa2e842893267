pub const DEFAULT_SEGMENT_COUNT: u32 = 12;
pub const SPIN_DURATION_MS: u32 = 3500;

// Prizes are drawn from {PRIZE_STEP, 2 * PRIZE_STEP, ..., PRIZE_STEPS * PRIZE_STEP}.
pub const PRIZE_STEP: u32 = 5;
pub const PRIZE_STEPS: u32 = 100;

// Share of the wheel that carries a prize, as a fraction (3/5 = 60%).
pub const PRIZE_SHARE_NUMERATOR: usize = 3;
pub const PRIZE_SHARE_DENOMINATOR: usize = 5;

pub const FULL_TURNS: f64 = 5.0;
pub const CURRENCY_SYMBOL: &str = "$";

pub const NO_PRIZE_MESSAGE: &str = "No prize, try again!";
