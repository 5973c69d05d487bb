use crate::{Biometrics, Sex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f32,
    pub category: BmiCategory,
}

impl Bmi {
    #[must_use]
    pub fn new(weight: f32, height: f32) -> Self {
        let height_m = height / 100.0;
        let value = weight / (height_m * height_m);
        Bmi {
            value,
            category: BmiCategory::from_value(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    #[must_use]
    pub fn from_value(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClass1
        } else if bmi < 40.0 {
            BmiCategory::ObeseClass2
        } else {
            BmiCategory::ObeseClass3
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Weight range in kilograms corresponding to a BMI of 18.5 to 24.9.
#[must_use]
pub fn healthy_weight_range(height: f32) -> (f32, f32) {
    let height_m = height / 100.0;
    (18.5 * height_m * height_m, 24.9 * height_m * height_m)
}

impl Biometrics {
    /// Body fat percentage according to the US Navy circumference method.
    ///
    /// Requires waist and neck circumferences, and additionally hips for
    /// women. Returns `None` if a required measurement is missing.
    #[must_use]
    pub fn body_fat_navy(&self) -> Option<f32> {
        let percentage = match self.sex {
            Sex::MALE => {
                495.0
                    / (1.0324 - 0.190_77 * (self.waist? - self.neck?).log10()
                        + 0.154_56 * self.height.log10())
                    - 450.0
            }
            Sex::FEMALE => {
                495.0
                    / (1.295_79 - 0.350_04 * (self.waist? + self.hips? - self.neck?).log10()
                        + 0.221 * self.height.log10())
                    - 450.0
            }
        };
        Some(percentage.max(0.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    Obese,
}

#[must_use]
pub fn body_fat_category(percentage: f32, sex: Sex) -> BodyFatCategory {
    let thresholds = match sex {
        Sex::MALE => [6.0, 14.0, 18.0, 25.0],
        Sex::FEMALE => [14.0, 21.0, 25.0, 32.0],
    };
    if percentage < thresholds[0] {
        BodyFatCategory::Essential
    } else if percentage < thresholds[1] {
        BodyFatCategory::Athletic
    } else if percentage < thresholds[2] {
        BodyFatCategory::Fitness
    } else if percentage < thresholds[3] {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Obese
    }
}

/// Ideal body weight in kilograms according to five height-based formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealWeight {
    pub devine: f32,
    pub robinson: f32,
    pub miller: f32,
    pub hamwi: f32,
    pub broca: f32,
}

impl IdealWeight {
    #[must_use]
    pub fn new(height: f32, sex: Sex) -> Self {
        let inches_over_5ft = (height / 2.54 - 60.0).max(0.0);
        match sex {
            Sex::MALE => IdealWeight {
                devine: 50.0 + 2.3 * inches_over_5ft,
                robinson: 52.0 + 1.9 * inches_over_5ft,
                miller: 56.2 + 1.41 * inches_over_5ft,
                hamwi: 48.0 + 2.7 * inches_over_5ft,
                broca: (height - 100.0) * 0.9,
            },
            Sex::FEMALE => IdealWeight {
                devine: 45.5 + 2.3 * inches_over_5ft,
                robinson: 49.0 + 1.7 * inches_over_5ft,
                miller: 53.1 + 1.36 * inches_over_5ft,
                hamwi: 45.5 + 2.2 * inches_over_5ft,
                broca: (height - 100.0) * 0.85,
            },
        }
    }

    #[must_use]
    pub fn average(&self) -> f32 {
        (self.devine + self.robinson + self.miller + self.hamwi + self.broca) / 5.0
    }
}
