//! Travel time estimates for computed routes.

use crate::types::error::{Result, RouterError};

/// Estimates the minutes needed to drive `distance_m` metres at
/// `average_speed_m_per_min`.
///
/// The estimate ignores stops and traffic; it is meant for comparing a
/// route against an operating-time limit, not for scheduling.
pub fn estimate_travel_time_minutes(distance_m: f64, average_speed_m_per_min: f64) -> Result<f64> {
    if !(average_speed_m_per_min.is_finite() && average_speed_m_per_min > 0.0) {
        return Err(RouterError::InvalidConfig {
            reason: format!(
                "average speed must be positive, got {}",
                average_speed_m_per_min
            ),
        });
    }
    debug!("distance_m: {}", distance_m);
    Ok(distance_m / average_speed_m_per_min)
}
