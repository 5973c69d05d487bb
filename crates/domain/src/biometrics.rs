use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            0 => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value {
            "female" => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub enum ActivityLevel {
    #[display("sedentary")]
    Sedentary,
    #[display("light")]
    Light,
    #[display("moderate")]
    Moderate,
    #[display("active")]
    Active,
    #[display("very_active")]
    VeryActive,
    #[display("athlete")]
    Athlete,
}

impl ActivityLevel {
    /// Factor applied to the basal metabolic rate to obtain the total
    /// daily energy expenditure. One canonical table is used throughout,
    /// the widely published Mifflin-St Jeor multipliers extended with a
    /// 2.1 tier for competitive athletes.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
            ActivityLevel::Athlete => 2.1,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days per week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days per week",
            ActivityLevel::Active => "Hard exercise 6-7 days per week",
            ActivityLevel::VeryActive => "Very hard exercise or a physical job",
            ActivityLevel::Athlete => "Professional or competitive training",
        }
    }
}

impl TryFrom<&str> for ActivityLevel {
    type Error = ActivityLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "athlete" => Ok(ActivityLevel::Athlete),
            _ => Err(ActivityLevelError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ActivityLevelError {
    #[error("Unknown activity level: {0}")]
    Unknown(String),
}

/// Body measurements as entered by the user.
///
/// Heights and circumferences are in centimeters, weights in kilograms.
/// Values are taken as given; nonsensical numbers propagate through the
/// formulas instead of being rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct Biometrics {
    pub age: u8,
    pub sex: Sex,
    pub height: f32,
    pub weight: f32,
    pub activity_level: ActivityLevel,
    pub neck: Option<f32>,
    pub waist: Option<f32>,
    pub hips: Option<f32>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Sex::FEMALE)]
    #[case(1, Sex::MALE)]
    #[case(2, Sex::MALE)]
    fn test_sex_from_u8(#[case] value: u8, #[case] expected: Sex) {
        assert_eq!(Sex::from(value), expected);
    }

    #[rstest]
    #[case(Sex::FEMALE, "female")]
    #[case(Sex::MALE, "male")]
    fn test_sex_display(#[case] sex: Sex, #[case] string: &str) {
        assert_eq!(sex.to_string(), string);
        assert_eq!(Sex::from(string), sex);
    }

    #[rstest]
    #[case("sedentary", Ok(ActivityLevel::Sedentary))]
    #[case("moderate", Ok(ActivityLevel::Moderate))]
    #[case("very_active", Ok(ActivityLevel::VeryActive))]
    #[case("athlete", Ok(ActivityLevel::Athlete))]
    #[case(
        "couch",
        Err(ActivityLevelError::Unknown("couch".to_string()))
    )]
    fn test_activity_level_try_from(
        #[case] value: &str,
        #[case] expected: Result<ActivityLevel, ActivityLevelError>,
    ) {
        assert_eq!(ActivityLevel::try_from(value), expected);
    }

    #[test]
    fn test_activity_level_multipliers_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
            ActivityLevel::Athlete,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, "sedentary")]
    #[case(ActivityLevel::Athlete, "athlete")]
    fn test_activity_level_display(#[case] level: ActivityLevel, #[case] string: &str) {
        assert_eq!(level.to_string(), string);
        assert_eq!(ActivityLevel::try_from(string), Ok(level));
    }
}
