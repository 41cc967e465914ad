//! Difficulty rating to move-selection policy.
//!
//! Each tier is a row in `DIFFICULTY_TIERS`.

use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SelectionPolicy {
    /// Uniformly random legal move. With probability `capture_bias`, the pick is
    /// restricted to captures when any exist.
    Random { capture_bias: f64 },
    /// Static evaluation of each move plus uniform noise in `[-noise, noise]`,
    /// then a uniform pick among the `top_n` best noisy scores.
    NoisyEvaluation { noise: i32, top_n: usize },
    /// Best move of a fixed-depth alpha-beta search.
    Search { depth: u8 },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DifficultyTier {
    pub name: &'static str,
    /// Lowest difficulty (inclusive) handled by this tier. The tier extends up to
    /// the next tier's minimum.
    pub min_difficulty: u16,
    pub policy: SelectionPolicy,
    /// How long a front end should pretend to think. Has no effect on the move.
    pub think_time: Duration,
}

pub const MIN_DIFFICULTY: u16 = 250;
pub const MAX_DIFFICULTY: u16 = 2800;

pub static DIFFICULTY_TIERS: [DifficultyTier; 6] = [
    DifficultyTier {
        name: "beginner",
        min_difficulty: 0,
        policy: SelectionPolicy::Random { capture_bias: 0.5 },
        think_time: Duration::from_millis(300),
    },
    DifficultyTier {
        name: "casual",
        min_difficulty: 550,
        policy: SelectionPolicy::NoisyEvaluation {
            noise: 75,
            top_n: 5,
        },
        think_time: Duration::from_millis(500),
    },
    DifficultyTier {
        name: "intermediate",
        min_difficulty: 900,
        policy: SelectionPolicy::Search { depth: 2 },
        think_time: Duration::from_millis(700),
    },
    DifficultyTier {
        name: "advanced",
        min_difficulty: 1300,
        policy: SelectionPolicy::Search { depth: 3 },
        think_time: Duration::from_millis(900),
    },
    DifficultyTier {
        name: "expert",
        min_difficulty: 1700,
        policy: SelectionPolicy::Search { depth: 4 },
        think_time: Duration::from_millis(1200),
    },
    // Same strength as expert; only the presentation differs.
    DifficultyTier {
        name: "master",
        min_difficulty: 2200,
        policy: SelectionPolicy::Search { depth: 4 },
        think_time: Duration::from_millis(2000),
    },
];

/// The tier for a difficulty rating. Ratings outside the supported range land in
/// the first or last tier.
pub fn tier_for(difficulty: u16) -> &'static DifficultyTier {
    DIFFICULTY_TIERS
        .iter()
        .rev()
        .find(|tier| difficulty >= tier.min_difficulty)
        .unwrap_or(&DIFFICULTY_TIERS[0])
}
