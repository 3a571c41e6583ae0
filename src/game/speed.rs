//! Mapping from score to snake speed
use crate::consts;
use std::time::Duration;

/// Time between ticks at the given score.  Shrinks by
/// [`TICK_INTERVAL_STEP`][consts::TICK_INTERVAL_STEP] for every
/// [`SPEEDUP_SCORE`][consts::SPEEDUP_SCORE] points and never drops below
/// [`MIN_TICK_INTERVAL`][consts::MIN_TICK_INTERVAL].
pub(crate) fn tick_interval(score: u32) -> Duration {
    consts::TICK_INTERVAL_STEP
        .checked_mul(score / consts::SPEEDUP_SCORE)
        .map_or(Duration::ZERO, |step| {
            consts::BASE_TICK_INTERVAL.saturating_sub(step)
        })
        .max(consts::MIN_TICK_INTERVAL)
}

/// Difficulty level shown to the player, starting at 1
pub(crate) fn difficulty_level(score: u32) -> u32 {
    score / consts::LEVEL_SCORE + 1
}

/// How far the speed has progressed from the base interval to the minimum,
/// as a ratio between 0 and 1
pub(crate) fn speed_progress(score: u32) -> f64 {
    let span = consts::BASE_TICK_INTERVAL.saturating_sub(consts::MIN_TICK_INTERVAL);
    let gained = consts::BASE_TICK_INTERVAL.saturating_sub(tick_interval(score));
    (gained.as_secs_f64() / span.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 150)]
    #[case(10, 150)]
    #[case(29, 150)]
    #[case(30, 130)]
    #[case(59, 130)]
    #[case(60, 110)]
    #[case(90, 90)]
    #[case(120, 70)]
    #[case(150, 50)]
    #[case(180, 50)]
    #[case(300, 50)]
    #[case(1000, 50)]
    #[case(u32::MAX, 50)]
    fn test_tick_interval(#[case] score: u32, #[case] millis: u64) {
        assert_eq!(tick_interval(score), Duration::from_millis(millis));
    }

    #[test]
    fn tick_interval_is_monotonic() {
        let mut prev = tick_interval(0);
        for score in 1..2000 {
            let ival = tick_interval(score);
            assert!(ival <= prev, "interval grew at score {score}");
            assert!(ival >= consts::MIN_TICK_INTERVAL);
            prev = ival;
        }
    }

    #[rstest]
    #[case(0, 1)]
    #[case(49, 1)]
    #[case(50, 2)]
    #[case(120, 3)]
    #[case(500, 11)]
    fn test_difficulty_level(#[case] score: u32, #[case] level: u32) {
        assert_eq!(difficulty_level(score), level);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(30, 0.2)]
    #[case(90, 0.6)]
    #[case(150, 1.0)]
    #[case(5000, 1.0)]
    fn test_speed_progress(#[case] score: u32, #[case] ratio: f64) {
        assert!((speed_progress(score) - ratio).abs() < 1e-9);
    }
}
