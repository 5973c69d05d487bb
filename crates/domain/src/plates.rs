use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum WeightUnit {
    #[display("kg")]
    Kg,
    #[display("lbs")]
    Lbs,
}

impl WeightUnit {
    /// Available plate weights, largest first. Fixed configuration, not
    /// derived from anything.
    fn plate_denominations(self) -> &'static [f32] {
        match self {
            WeightUnit::Kg => &[25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25],
            WeightUnit::Lbs => &[45.0, 35.0, 25.0, 10.0, 5.0, 2.5],
        }
    }
}

impl TryFrom<&str> for WeightUnit {
    type Error = WeightUnitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(WeightUnitError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightUnitError {
    #[error("Unknown weight unit: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Barbell {
    Olympic,
    Womens,
    Technique,
}

impl Barbell {
    #[must_use]
    pub fn weight(self, unit: WeightUnit) -> f32 {
        match (self, unit) {
            (Barbell::Olympic, WeightUnit::Kg) => 20.0,
            (Barbell::Olympic, WeightUnit::Lbs) => 45.0,
            (Barbell::Womens, WeightUnit::Kg) => 15.0,
            (Barbell::Womens, WeightUnit::Lbs) => 35.0,
            (Barbell::Technique, WeightUnit::Kg) => 10.0,
            (Barbell::Technique, WeightUnit::Lbs) => 15.0,
        }
    }
}

impl TryFrom<&str> for Barbell {
    type Error = BarbellError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "olympic" => Ok(Barbell::Olympic),
            "womens" => Ok(Barbell::Womens),
            "technique" => Ok(Barbell::Technique),
            _ => Err(BarbellError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BarbellError {
    #[error("Unknown barbell: {0}")]
    Unknown(String),
}

/// Plates to put on each side of a barbell to approach a target weight.
///
/// `plates` holds (plate weight, count per side) pairs, largest plates
/// first. `difference` is `actual_weight - target`, so a negative value
/// means the loadout falls short of the target.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateLoadout {
    pub barbell_weight: f32,
    pub plates: Vec<(f32, u32)>,
    pub actual_weight: f32,
    pub is_exact: bool,
    pub difference: f32,
}

impl PlateLoadout {
    #[must_use]
    pub fn solve(target: f32, unit: WeightUnit, barbell: Barbell) -> Self {
        let barbell_weight = barbell.weight(unit);
        let mut remaining = ((target - barbell_weight) / 2.0).max(0.0);
        let mut plates = Vec::new();
        for &plate in unit.plate_denominations() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = (remaining / plate).floor() as u32;
            if count > 0 {
                plates.push((plate, count));
                remaining -= plate * count as f32;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let actual_weight = barbell_weight
            + 2.0
                * plates
                    .iter()
                    .map(|(plate, count)| plate * *count as f32)
                    .sum::<f32>();
        let difference = actual_weight - target;
        let is_exact = difference.abs() < f32::EPSILON;
        if !is_exact {
            debug!("no exact loadout for {target} {unit}, off by {difference}");
        }
        PlateLoadout {
            barbell_weight,
            plates,
            actual_weight,
            is_exact,
            difference,
        }
    }
}
