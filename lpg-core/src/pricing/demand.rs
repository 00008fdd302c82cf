#[cfg(test)]
#[path = "../../tests/unit/pricing/demand_test.rs"]
mod demand_test;

use crate::models::common::{DeliveryTime, HourWindow};
use crate::utils::{Float, Random};
use std::sync::Arc;

/// A minimal demand level.
pub const MIN_DEMAND_LEVEL: Float = 0.;
/// A maximal demand level.
pub const MAX_DEMAND_LEVEL: Float = 100.;

/// Provides a demand level in `[0, 100]` range for the given delivery time.
pub trait DemandEstimator {
    /// Estimates demand level.
    fn estimate(&self, time: &DeliveryTime) -> Float;
}

/// Returns an externally known demand level regardless of time.
pub struct FixedDemand {
    level: Float,
}

impl FixedDemand {
    /// Creates a new instance of `FixedDemand`, the level is clamped to the valid range.
    pub fn new(level: Float) -> Self {
        Self { level: level.clamp(MIN_DEMAND_LEVEL, MAX_DEMAND_LEVEL) }
    }
}

impl DemandEstimator for FixedDemand {
    fn estimate(&self, _: &DeliveryTime) -> Float {
        self.level
    }
}

/// Approximates demand with a time of day pattern plus a random jitter. It is a stand-in for
/// a real, order volume based, demand signal.
pub struct TimeOfDayDemand {
    random: Arc<dyn Random + Send + Sync>,
    max_jitter: Float,
}

impl TimeOfDayDemand {
    /// A demand level when no pattern applies.
    const BASE_LEVEL: Float = 30.;
    /// Evening peak hours.
    const PEAK_HOURS: HourWindow = HourWindow::new(17, 20);
    const PEAK_BONUS: Float = 30.;
    /// Breakfast and lunch hours.
    const MEAL_HOURS: [HourWindow; 2] = [HourWindow::new(6, 9), HourWindow::new(12, 14)];
    const MEAL_BONUS: Float = 20.;
    const WEEKEND_BONUS: Float = 15.;

    /// Creates a new instance of `TimeOfDayDemand` with jitter up to `max_jitter`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, max_jitter: Float) -> Self {
        Self { random, max_jitter: max_jitter.max(0.) }
    }
}

impl DemandEstimator for TimeOfDayDemand {
    fn estimate(&self, time: &DeliveryTime) -> Float {
        let mut level = Self::BASE_LEVEL;

        if Self::PEAK_HOURS.contains(time) {
            level += Self::PEAK_BONUS;
        }

        if Self::MEAL_HOURS.iter().any(|window| window.contains(time)) {
            level += Self::MEAL_BONUS;
        }

        if time.is_weekend() {
            level += Self::WEEKEND_BONUS;
        }

        level += self.random.uniform_real(0., self.max_jitter);

        level.clamp(MIN_DEMAND_LEVEL, MAX_DEMAND_LEVEL)
    }
}
