use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::constants::*;

/// The fixed neon palette every segment color is drawn from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeonColor {
    Green,
    Blue,
    Pink,
    Yellow,
    Red,
    Cyan,
    Orange,
    Purple,
}

impl NeonColor {
    pub const PALETTE: [NeonColor; 8] = [
        NeonColor::Green,
        NeonColor::Blue,
        NeonColor::Pink,
        NeonColor::Yellow,
        NeonColor::Red,
        NeonColor::Cyan,
        NeonColor::Orange,
        NeonColor::Purple,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            NeonColor::Green => "#39ff14",
            NeonColor::Blue => "#00eaff",
            NeonColor::Pink => "#ff00de",
            NeonColor::Yellow => "#fff700",
            NeonColor::Red => "#ff073a",
            NeonColor::Cyan => "#00ffea",
            NeonColor::Orange => "#ff9900",
            NeonColor::Purple => "#bc13fe",
        }
    }

    /// Picks a palette entry uniformly; repeats across segments are allowed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }
}

/// One slice of the wheel: a prize, or a blank with no value and no label.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub value: Option<u32>,
    pub color: NeonColor,
}

impl Segment {
    pub fn prize(value: u32, color: NeonColor) -> Self {
        Self {
            label: format_currency(value),
            value: Some(value),
            color,
        }
    }

    pub fn blank(color: NeonColor) -> Self {
        Self {
            label: String::new(),
            value: None,
            color,
        }
    }

    pub fn is_prize(&self) -> bool {
        matches!(self.value, Some(value) if value > 0) && !self.label.is_empty()
    }
}

pub fn format_currency(value: u32) -> String {
    format!("{}{}", CURRENCY_SYMBOL, value)
}

/// Number of prize segments on a wheel of `segment_count` slices, i.e. floor(0.6 * n).
pub fn prize_count(segment_count: usize) -> usize {
    segment_count * PRIZE_SHARE_NUMERATOR / PRIZE_SHARE_DENOMINATOR
}

fn random_prize_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..PRIZE_STEPS) * PRIZE_STEP + PRIZE_STEP
}

/// Builds a freshly randomized wheel. Prizes and blanks are generated
/// independently and then shuffled with a uniform (Fisher-Yates) shuffle.
pub fn generate_wheel<R: Rng + ?Sized>(segment_count: usize, rng: &mut R) -> Vec<Segment> {
    let prizes = prize_count(segment_count);
    let mut wheel = Vec::with_capacity(segment_count);

    for _ in 0..prizes {
        let value = random_prize_value(rng);
        wheel.push(Segment::prize(value, NeonColor::random(rng)));
    }
    for _ in prizes..segment_count {
        wheel.push(Segment::blank(NeonColor::random(rng)));
    }

    wheel.shuffle(rng);
    log::info!(
        "Generated wheel with {} segments ({} prizes, {} blanks)",
        segment_count,
        prizes,
        segment_count - prizes
    );
    wheel
}

/// Index of the segment that ends up under the pointer for a drawn `target`.
/// The wheel turns while the pointer stays put, so the landing segment is
/// the mirror of the target around the starting orientation.
pub fn resolved_index(wheel_len: usize, target: usize) -> usize {
    debug_assert!(wheel_len > 0, "resolved_index on an empty wheel");
    (wheel_len - target % wheel_len) % wheel_len
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    Win(u32),
    NoPrize,
}

impl SpinOutcome {
    pub fn from_segment(segment: &Segment) -> Self {
        match segment.value {
            Some(value) if segment.is_prize() => SpinOutcome::Win(value),
            _ => SpinOutcome::NoPrize,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, SpinOutcome::Win(_))
    }

    pub fn message(&self) -> String {
        match self {
            SpinOutcome::Win(value) => format!("You won {}!", format_currency(*value)),
            SpinOutcome::NoPrize => NO_PRIZE_MESSAGE.to_string(),
        }
    }
}

/// Full state of one wheel: its segments plus the transient spin state.
/// `spin` moves idle -> spinning, `complete_spin` moves spinning -> idle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelGame {
    pub config: WheelConfig,
    pub wheel: Vec<Segment>,
    pub spinning: bool,
    pub selected: Option<usize>,
    pub result: Option<String>,
}

impl WheelGame {
    pub fn new<R: Rng + ?Sized>(config: WheelConfig, rng: &mut R) -> Self {
        let wheel = generate_wheel(config.segments(), rng);
        Self {
            config,
            wheel,
            spinning: false,
            selected: None,
            result: None,
        }
    }

    /// Starts a spin and returns the drawn target. Returns `None` without
    /// touching any state when a spin is already in progress.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.spinning {
            log::debug!("Ignoring spin request while the wheel is spinning");
            return None;
        }
        if self.wheel.is_empty() {
            return None;
        }

        let target = rng.gen_range(0..self.wheel.len());
        self.spinning = true;
        self.result = None;
        self.selected = Some(target);
        log::info!("Spin started, target segment {}", target);
        Some(target)
    }

    /// Resolves the running spin and records the result message.
    /// Does nothing when no spin is running.
    pub fn complete_spin(&mut self) -> Option<&str> {
        if !self.spinning {
            return None;
        }
        let outcome = self.outcome()?;
        self.spinning = false;
        let message = outcome.message();
        log::info!(
            "Spin resolved on segment {:?}: {}",
            self.resolved_segment_index(),
            message
        );
        self.result = Some(message);
        self.result.as_deref()
    }

    /// Regenerates the wheel and clears selection and result. Ignored while spinning.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.spinning {
            log::debug!("Ignoring reset request while the wheel is spinning");
            return false;
        }
        self.wheel = generate_wheel(self.config.segments(), rng);
        self.selected = None;
        self.result = None;
        true
    }

    pub fn resolved_segment_index(&self) -> Option<usize> {
        let target = self.selected?;
        if self.wheel.is_empty() {
            return None;
        }
        Some(resolved_index(self.wheel.len(), target))
    }

    pub fn resolved_segment(&self) -> Option<&Segment> {
        self.resolved_segment_index().and_then(|index| self.wheel.get(index))
    }

    pub fn outcome(&self) -> Option<SpinOutcome> {
        self.resolved_segment().map(SpinOutcome::from_segment)
    }

    pub fn is_idle(&self) -> bool {
        !self.spinning
    }
}
