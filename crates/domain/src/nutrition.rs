#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Goal {
    #[display("weight_loss")]
    WeightLoss,
    #[display("maintain")]
    Maintain,
    #[display("muscle_gain")]
    MuscleGain,
}

impl Goal {
    /// Calorie fractions for protein, carbohydrates and fat.
    fn split(self) -> (f32, f32, f32) {
        match self {
            Goal::WeightLoss => (0.45, 0.30, 0.25),
            Goal::Maintain => (0.35, 0.35, 0.30),
            Goal::MuscleGain => (0.30, 0.40, 0.30),
        }
    }

    fn protein_per_kg(self) -> f32 {
        match self {
            Goal::WeightLoss => 2.2,
            Goal::Maintain | Goal::MuscleGain => 1.8,
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "weight_loss" => Ok(Goal::WeightLoss),
            "maintain" => Ok(Goal::Maintain),
            "muscle_gain" => Ok(Goal::MuscleGain),
            _ => Err(GoalError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("Unknown goal: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macro {
    pub grams: f32,
    pub percentage: f32,
}

const KCAL_PER_GRAM_PROTEIN: f32 = 4.0;
const KCAL_PER_GRAM_CARBS: f32 = 4.0;
const KCAL_PER_GRAM_FAT: f32 = 9.0;

/// Daily macronutrient targets for a calorie budget.
///
/// Grams are rounded to whole grams, percentages are recomputed from the
/// rounded grams so the two stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroDistribution {
    pub calories: f32,
    pub protein: Macro,
    pub carbs: Macro,
    pub fat: Macro,
}

impl MacroDistribution {
    /// Minimum difference in grams before the body-weight-based protein
    /// target replaces the percentage-derived one.
    const PROTEIN_OVERRIDE_THRESHOLD: f32 = 10.0;

    #[must_use]
    pub fn new(calories: f32, goal: Goal, weight: Option<f32>) -> Self {
        let (protein_share, carb_share, fat_share) = goal.split();
        let mut protein = calories * protein_share / KCAL_PER_GRAM_PROTEIN;
        let mut carbs = calories * carb_share / KCAL_PER_GRAM_CARBS;
        let mut fat = calories * fat_share / KCAL_PER_GRAM_FAT;

        if let Some(weight) = weight {
            let target = weight * goal.protein_per_kg();
            if (target - protein).abs() > Self::PROTEIN_OVERRIDE_THRESHOLD {
                protein = target;
                // redistribute the remaining budget at the original
                // carb-to-fat calorie ratio
                let remaining = calories - protein * KCAL_PER_GRAM_PROTEIN;
                let carb_fraction = carb_share / (carb_share + fat_share);
                carbs = remaining * carb_fraction / KCAL_PER_GRAM_CARBS;
                fat = remaining * (1.0 - carb_fraction) / KCAL_PER_GRAM_FAT;
            }
        }

        let protein = protein.round();
        let carbs = carbs.round();
        let fat = fat.round();

        MacroDistribution {
            calories,
            protein: Macro {
                grams: protein,
                percentage: protein * KCAL_PER_GRAM_PROTEIN / calories * 100.0,
            },
            carbs: Macro {
                grams: carbs,
                percentage: carbs * KCAL_PER_GRAM_CARBS / calories * 100.0,
            },
            fat: Macro {
                grams: fat,
                percentage: fat * KCAL_PER_GRAM_FAT / calories * 100.0,
            },
        }
    }

    /// Calories represented by the final gram values.
    #[must_use]
    pub fn total_kcal(&self) -> f32 {
        self.protein.grams * KCAL_PER_GRAM_PROTEIN
            + self.carbs.grams * KCAL_PER_GRAM_CARBS
            + self.fat.grams * KCAL_PER_GRAM_FAT
    }
}
