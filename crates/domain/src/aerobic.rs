/// VO2 max in ml/kg/min estimated from the distance in meters covered in
/// the Cooper 12-minute run test.
#[must_use]
pub fn vo2_max_cooper(distance: f32) -> f32 {
    (distance - 504.9) / 44.73
}

/// VO2 max in ml/kg/min estimated from resting and maximum heart rate
/// (Uth et al.). Returns `None` for a non-positive resting heart rate.
#[must_use]
pub fn vo2_max_heart_rate_ratio(max_hr: f32, resting_hr: f32) -> Option<f32> {
    if resting_hr <= 0.0 {
        return None;
    }
    Some(15.3 * max_hr / resting_hr)
}
