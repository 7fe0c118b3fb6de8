use std::{ops::RangeInclusive, str::FromStr};

use strum::{Display, EnumString};

pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=200.0;
pub const HEIGHT_RANGE_M: RangeInclusive<f64> = 1.0..=2.5;
pub const AGE_RANGE_YEARS: RangeInclusive<i64> = 10..=100;

/// Heights above this value are taken to be in centimetres.
const CENTIMETRE_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Unrecognized gender \"{0}\", expected Male or Female")]
    InvalidGender(String),
    #[error("Weight must be between 20 and 200 kg, got {0}")]
    WeightOutOfRange(f64),
    #[error("Height must be between 1.0 and 2.5 m, got {0}")]
    HeightOutOfRange(f64),
    #[error("Age must be between 10 and 100 years, got {0}")]
    AgeOutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn parse(value: &str) -> Result<Self, MetricsError> {
        Self::from_str(value.trim()).map_err(|_| MetricsError::InvalidGender(value.to_owned()))
    }

    /// Numeric code fed to the classifier. Labels are encoded in
    /// alphabetical order, so `Female` is 0 and `Male` is 1.
    pub fn code(self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

/// Converts a height to metres, assuming anything above 3 was given in
/// centimetres. A height of exactly 3 is left untouched.
pub fn normalize_height(height: f64) -> f64 {
    if height > CENTIMETRE_THRESHOLD {
        height / 100.0
    } else {
        height
    }
}

/// Validated body metrics of a single user. Height is always in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserMetrics {
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
}

impl UserMetrics {
    pub fn new(weight: f64, height: f64, age: i64, gender: Gender) -> Result<Self, MetricsError> {
        let height = normalize_height(height);
        if !WEIGHT_RANGE_KG.contains(&weight) {
            return Err(MetricsError::WeightOutOfRange(weight));
        }
        if !HEIGHT_RANGE_M.contains(&height) {
            return Err(MetricsError::HeightOutOfRange(height));
        }
        if !AGE_RANGE_YEARS.contains(&age) {
            return Err(MetricsError::AgeOutOfRange(age));
        }

        Ok(Self {
            weight,
            height,
            age: age as u32,
            gender,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn height_m(&self) -> f64 {
        self.height
    }
    pub fn height_cm(&self) -> f64 {
        self.height * 100.0
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(self.weight, self.height, f64::from(self.age), self.gender)
    }
}

/// Classifier input in training column order: weight, height (m), age,
/// encoded gender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; 4]);

impl FeatureVector {
    pub fn new(weight: f64, height_m: f64, age: f64, gender: Gender) -> Self {
        Self([weight, height_m, age, gender.code()])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}
