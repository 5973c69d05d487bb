use log::debug;

use crate::{ActivityLevel, Biometrics, Sex};

/// Basal metabolic rate in kcal per day, Mifflin-St Jeor equation.
#[must_use]
pub fn bmr(biometrics: &Biometrics) -> f32 {
    let base = 10.0 * biometrics.weight + 6.25 * biometrics.height
        - 5.0 * f32::from(biometrics.age);
    match biometrics.sex {
        Sex::MALE => base + 5.0,
        Sex::FEMALE => base - 161.0,
    }
}

/// Total daily energy expenditure in kcal per day.
#[must_use]
pub fn tdee(bmr: f32, activity_level: ActivityLevel) -> f32 {
    bmr * activity_level.multiplier()
}

/// Daily calorie targets derived from one TDEE value.
///
/// Loss targets are clamped to sex-specific floors, so for a very low
/// TDEE a floor may exceed the maintenance value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieRecommendations {
    pub aggressive_loss: f32,
    pub steady_loss: f32,
    pub maintain: f32,
    pub muscle_gain: f32,
}

impl CalorieRecommendations {
    const STEADY_DEFICIT: f32 = 500.0;
    const MAX_DAILY_DEFICIT: f32 = 1000.0;
    const MUSCLE_GAIN_SURPLUS: f32 = 300.0;

    #[must_use]
    pub fn new(tdee: f32, sex: Sex, weight: f32) -> Self {
        let (aggressive_floor, steady_floor) = match sex {
            Sex::MALE => (1500.0, 1800.0),
            Sex::FEMALE => (1200.0, 1500.0),
        };
        // kcal per day equivalent of losing 0.7 % of body weight per week,
        // kept between the steady deficit and the hard daily cap
        let percentage_deficit = weight * 0.007 * 7700.0 / 7.0;
        let aggressive_deficit =
            percentage_deficit.clamp(Self::STEADY_DEFICIT, Self::MAX_DAILY_DEFICIT);
        if tdee - aggressive_deficit < aggressive_floor || tdee - Self::STEADY_DEFICIT < steady_floor
        {
            debug!("calorie deficit clamped to floor at tdee {tdee} kcal");
        }
        CalorieRecommendations {
            aggressive_loss: (tdee - aggressive_deficit).max(aggressive_floor),
            steady_loss: (tdee - Self::STEADY_DEFICIT).max(steady_floor),
            maintain: tdee,
            muscle_gain: tdee + Self::MUSCLE_GAIN_SURPLUS,
        }
    }
}

/// Recommended daily water intake in milliliters, 30 ml per kg of body
/// weight scaled by activity.
#[must_use]
pub fn daily_water_ml(weight: f32, activity_level: ActivityLevel) -> u32 {
    let factor = match activity_level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.1,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Active => 1.3,
        ActivityLevel::VeryActive => 1.4,
        ActivityLevel::Athlete => 1.5,
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ml = (weight * 30.0 * factor).round() as u32;
    ml
}
