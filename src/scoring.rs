//! ECE to calibration score conversion.
//!
//! Normalizes an expected-calibration-error magnitude into the unitless
//! [0, 1] score the rest of the system reasons about. A deliberately simple
//! linear decay, not a statistically derived transform; the slope and clamp
//! bounds are load-bearing for compatibility with stored baselines and must
//! not change.

/// Linear decay slope applied to ECE.
const ECE_SCORE_SLOPE: f32 = 5.0;

/// Convert ECE to a calibration score where higher is better.
///
/// - ECE 0.0 maps to 1.0 (perfect calibration)
/// - the 0.018 baseline maps to ~0.91
/// - ECE 0.2 and above clamps to 0.0
pub fn ece_to_calibration_score(ece: f32) -> f32 {
    (1.0 - ece * ECE_SCORE_SLOPE).clamp(0.0, 1.0)
}

/// Invert the score transform to recover an ECE estimate.
///
/// Used when drift must be assessed for an environment with no live metric,
/// deriving the current ECE from the stored score. Lossy for scores that
/// were clamped at either bound.
pub fn calibration_score_to_ece(score: f32) -> f32 {
    (1.0 - score.clamp(0.0, 1.0)) / ECE_SCORE_SLOPE
}
