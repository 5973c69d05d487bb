use crate::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Lift {
    #[display("squat")]
    Squat,
    #[display("bench")]
    Bench,
    #[display("deadlift")]
    Deadlift,
    #[display("press")]
    Press,
}

impl Lift {
    /// Minimum lift-to-bodyweight ratios for the novice, intermediate,
    /// advanced and elite tiers. Anything below the first entry is
    /// beginner territory.
    fn thresholds(self, sex: Sex) -> [f32; 4] {
        match (self, sex) {
            (Lift::Squat, Sex::MALE) => [1.0, 1.5, 2.0, 2.5],
            (Lift::Squat, Sex::FEMALE) => [0.75, 1.0, 1.5, 2.0],
            (Lift::Bench, Sex::MALE) => [0.75, 1.0, 1.5, 2.0],
            (Lift::Bench, Sex::FEMALE) => [0.4, 0.6, 0.9, 1.2],
            (Lift::Deadlift, Sex::MALE) => [1.5, 2.0, 2.5, 3.0],
            (Lift::Deadlift, Sex::FEMALE) => [1.0, 1.5, 2.0, 2.5],
            (Lift::Press, Sex::MALE) => [0.5, 0.75, 1.0, 1.25],
            (Lift::Press, Sex::FEMALE) => [0.35, 0.5, 0.7, 0.9],
        }
    }
}

impl TryFrom<&str> for Lift {
    type Error = LiftError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "squat" => Ok(Lift::Squat),
            "bench" => Ok(Lift::Bench),
            "deadlift" => Ok(Lift::Deadlift),
            "press" => Ok(Lift::Press),
            _ => Err(LiftError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LiftError {
    #[error("Unknown lift: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

impl StrengthTier {
    /// Score values at which each tier starts on the 0-100 scale. This
    /// table classifies overall scores and anchors the per-lift
    /// interpolation; it is separate from the per-lift ratio tables.
    const SCORE_THRESHOLDS: [(StrengthTier, f32); 4] = [
        (StrengthTier::Novice, 35.0),
        (StrengthTier::Intermediate, 55.0),
        (StrengthTier::Advanced, 75.0),
        (StrengthTier::Elite, 90.0),
    ];

    #[must_use]
    pub fn from_score(score: f32) -> Self {
        Self::SCORE_THRESHOLDS
            .iter()
            .rev()
            .find(|(_, threshold)| score >= *threshold)
            .map_or(StrengthTier::Beginner, |(tier, _)| *tier)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StrengthTier::Beginner => "Beginner",
            StrengthTier::Novice => "Novice",
            StrengthTier::Intermediate => "Intermediate",
            StrengthTier::Advanced => "Advanced",
            StrengthTier::Elite => "Elite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthClassification {
    pub tier: StrengthTier,
    pub score: f32,
    pub ratio: f32,
}

impl StrengthClassification {
    /// Ratio multiple of the elite threshold at which the score saturates.
    const SCORE_CAP_FACTOR: f32 = 1.25;

    #[must_use]
    pub fn new(lift: Lift, sex: Sex, bodyweight: f32, weight: f32) -> Self {
        let ratio = weight / bodyweight;
        let thresholds = lift.thresholds(sex);
        let tier = thresholds
            .iter()
            .zip([
                StrengthTier::Novice,
                StrengthTier::Intermediate,
                StrengthTier::Advanced,
                StrengthTier::Elite,
            ])
            .rev()
            .find(|(threshold, _)| ratio >= **threshold)
            .map_or(StrengthTier::Beginner, |(_, tier)| tier);
        StrengthClassification {
            tier,
            score: Self::score(ratio, &thresholds),
            ratio,
        }
    }

    /// Continuous 0-100 score, linearly interpolated between the tier
    /// breakpoints so progress within a tier stays visible.
    fn score(ratio: f32, thresholds: &[f32; 4]) -> f32 {
        let anchors = [
            (0.0, 0.0),
            (thresholds[0], 35.0),
            (thresholds[1], 55.0),
            (thresholds[2], 75.0),
            (thresholds[3], 90.0),
            (thresholds[3] * Self::SCORE_CAP_FACTOR, 100.0),
        ];
        if ratio <= 0.0 {
            return 0.0;
        }
        for pair in anchors.windows(2) {
            let (start_ratio, start_score) = pair[0];
            let (end_ratio, end_score) = pair[1];
            if ratio < end_ratio {
                return start_score
                    + (ratio - start_ratio) / (end_ratio - start_ratio)
                        * (end_score - start_score);
            }
        }
        100.0
    }
}

/// Mean of the per-lift scores, `None` for an empty set.
#[must_use]
pub fn overall_score(classifications: &[StrengthClassification]) -> Option<f32> {
    if classifications.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean =
        classifications.iter().map(|c| c.score).sum::<f32>() / classifications.len() as f32;
    Some(mean)
}

/// Estimated one-repetition maximum, the mean of the Epley and Brzycki
/// estimates. Valid for sets of 1 to 12 repetitions.
#[must_use]
pub fn one_rm_estimate(weight: f32, reps: u32) -> Option<f32> {
    match reps {
        0 | 13.. => None,
        1 => Some(weight),
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let reps = reps as f32;
            let epley = weight * (1.0 + reps / 30.0);
            let brzycki = weight * 36.0 / (37.0 - reps);
            Some((epley + brzycki) / 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("squat", Ok(Lift::Squat))]
    #[case("deadlift", Ok(Lift::Deadlift))]
    #[case("curl", Err(LiftError::Unknown("curl".to_string())))]
    fn test_lift_try_from(#[case] value: &str, #[case] expected: Result<Lift, LiftError>) {
        assert_eq!(Lift::try_from(value), expected);
    }

    #[test]
    fn test_thresholds_strictly_increasing() {
        for lift in [Lift::Squat, Lift::Bench, Lift::Deadlift, Lift::Press] {
            for sex in [Sex::MALE, Sex::FEMALE] {
                let thresholds = lift.thresholds(sex);
                for pair in thresholds.windows(2) {
                    assert!(pair[0] < pair[1], "{lift} {sex}");
                }
            }
        }
    }

    #[test]
    fn test_classification_squat() {
        let classification = StrengthClassification::new(Lift::Squat, Sex::MALE, 80.0, 140.0);
        assert_eq!(classification.tier, StrengthTier::Intermediate);
        assert_approx_eq!(classification.ratio, 1.75, 0.001);
        assert_approx_eq!(classification.score, 65.0, 0.01);
    }

    #[rstest]
    #[case::beginner(Lift::Bench, Sex::MALE, 80.0, 40.0, StrengthTier::Beginner)]
    #[case::novice(Lift::Bench, Sex::MALE, 80.0, 64.0, StrengthTier::Novice)]
    #[case::advanced(Lift::Deadlift, Sex::MALE, 80.0, 210.0, StrengthTier::Advanced)]
    #[case::elite(Lift::Press, Sex::MALE, 80.0, 100.0, StrengthTier::Elite)]
    #[case::female_intermediate(Lift::Squat, Sex::FEMALE, 60.0, 60.0, StrengthTier::Intermediate)]
    #[case::female_elite(Lift::Deadlift, Sex::FEMALE, 60.0, 150.0, StrengthTier::Elite)]
    fn test_classification_tiers(
        #[case] lift: Lift,
        #[case] sex: Sex,
        #[case] bodyweight: f32,
        #[case] weight: f32,
        #[case] expected: StrengthTier,
    ) {
        assert_eq!(
            StrengthClassification::new(lift, sex, bodyweight, weight).tier,
            expected
        );
    }

    #[rstest]
    #[case::below_novice(Lift::Bench, Sex::MALE, 80.0, 40.0, 23.33)]
    #[case::at_novice(Lift::Squat, Sex::MALE, 80.0, 80.0, 35.0)]
    #[case::at_elite(Lift::Squat, Sex::MALE, 80.0, 200.0, 90.0)]
    #[case::above_cap(Lift::Deadlift, Sex::MALE, 80.0, 320.0, 100.0)]
    fn test_score(
        #[case] lift: Lift,
        #[case] sex: Sex,
        #[case] bodyweight: f32,
        #[case] weight: f32,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(
            StrengthClassification::new(lift, sex, bodyweight, weight).score,
            expected,
            0.01
        );
    }

    #[test]
    fn test_score_zero_for_nonpositive_ratio() {
        let classification = StrengthClassification::new(Lift::Squat, Sex::MALE, 80.0, 0.0);
        assert_eq!(classification.score, 0.0);
        assert_eq!(classification.tier, StrengthTier::Beginner);
    }

    #[test]
    fn test_overall_score() {
        let classifications = [
            StrengthClassification::new(Lift::Squat, Sex::MALE, 80.0, 140.0),
            StrengthClassification::new(Lift::Squat, Sex::MALE, 80.0, 120.0),
        ];
        let score = overall_score(&classifications).unwrap();
        assert_approx_eq!(score, 60.0, 0.01);
        assert_eq!(StrengthTier::from_score(score), StrengthTier::Intermediate);
    }

    #[test]
    fn test_overall_score_empty() {
        assert_eq!(overall_score(&[]), None);
    }

    #[rstest]
    #[case(34.9, StrengthTier::Beginner)]
    #[case(35.0, StrengthTier::Novice)]
    #[case(55.0, StrengthTier::Intermediate)]
    #[case(75.0, StrengthTier::Advanced)]
    #[case(90.0, StrengthTier::Elite)]
    fn test_tier_from_score(#[case] score: f32, #[case] expected: StrengthTier) {
        assert_eq!(StrengthTier::from_score(score), expected);
    }

    #[rstest]
    #[case::single(100.0, 1, Some(100.0))]
    #[case::five_reps(100.0, 5, Some(114.58))]
    #[case::no_reps(100.0, 0, None)]
    #[case::too_many_reps(100.0, 13, None)]
    fn test_one_rm_estimate(
        #[case] weight: f32,
        #[case] reps: u32,
        #[case] expected: Option<f32>,
    ) {
        match (one_rm_estimate(weight, reps), expected) {
            (Some(actual), Some(expected)) => assert_approx_eq!(actual, expected, 0.01),
            (actual, expected) => assert_eq!(actual, expected),
        }
    }
}
