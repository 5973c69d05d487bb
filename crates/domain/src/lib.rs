#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod achievements;
pub mod aerobic;
pub mod biometrics;
pub mod body;
pub mod energy;
pub mod nutrition;
pub mod plates;
pub mod strength;

pub use achievements::{
    Achievement, AchievementCategory, AchievementDefinition, AchievementTier, TrainingCounters,
    achievements, next_achievement, recently_unlocked,
};
pub use aerobic::{vo2_max_cooper, vo2_max_heart_rate_ratio};
pub use biometrics::{ActivityLevel, ActivityLevelError, Biometrics, Sex};
pub use body::{
    Bmi, BmiCategory, BodyFatCategory, IdealWeight, body_fat_category, healthy_weight_range,
};
pub use energy::{CalorieRecommendations, bmr, daily_water_ml, tdee};
pub use nutrition::{Goal, GoalError, Macro, MacroDistribution};
pub use plates::{Barbell, BarbellError, PlateLoadout, WeightUnit, WeightUnitError};
pub use strength::{
    Lift, LiftError, StrengthClassification, StrengthTier, one_rm_estimate, overall_score,
};
