use strum::{Display, EnumIter, EnumString};

use super::metrics::{Gender, UserMetrics};

/// WHO body mass index classification. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum BmiCategory {
    #[strum(serialize = "Severe Thinness")]
    SevereThinness,
    #[strum(serialize = "Moderate Thinness")]
    ModerateThinness,
    #[strum(serialize = "Mild Thinness")]
    MildThinness,
    #[strum(serialize = "Normal")]
    Normal,
    #[strum(serialize = "Overweight")]
    Overweight,
    #[strum(serialize = "Obese")]
    Obese,
    #[strum(serialize = "Severe Obese")]
    SevereObese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SevereThinness
        } else if bmi < 16.9 {
            BmiCategory::ModerateThinness
        } else if bmi < 18.4 {
            BmiCategory::MildThinness
        } else if bmi < 24.9 {
            BmiCategory::Normal
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else if bmi < 34.9 {
            BmiCategory::Obese
        } else {
            BmiCategory::SevereObese
        }
    }
}

/// Physical activity factor applied to the basal metabolic rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

/// Body mass index in kg/m², rounded to two decimals.
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> f64 {
    round_to_hundredths(weight_kg / (height_m * height_m))
}

/// Basal metabolic rate in kcal/day using the revised Harris-Benedict
/// equation.
pub fn basal_metabolic_rate(metrics: &UserMetrics) -> f64 {
    let weight = metrics.weight();
    let height_cm = metrics.height_cm();
    let age = f64::from(metrics.age());

    match metrics.gender() {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight + 3.098 * height_cm - 4.330 * age,
    }
}

pub fn daily_calories(metrics: &UserMetrics, activity_level: ActivityLevel) -> u32 {
    (basal_metabolic_rate(metrics) * activity_level.multiplier()).round() as u32
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
