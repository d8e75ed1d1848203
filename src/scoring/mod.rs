pub mod scoring;

pub use scoring::{score_move, ScoreBreakdown, BINGO_BONUS};
