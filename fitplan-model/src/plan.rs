use num_derive::FromPrimitive;
use strum::{Display, EnumCount, EnumIter};

/// Workout plan tier predicted by the classifier. The discriminant is the
/// label used in the training dataset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive, Display, EnumIter, EnumCount,
)]
pub enum PlanId {
    WeightGain = 1,
    GradualStrength = 2,
    MuscleBuilding = 3,
    #[default]
    FitnessMaintenance = 4,
    WeightLoss = 5,
    LowImpactFatLoss = 6,
    Therapeutic = 7,
}

impl PlanId {
    pub fn from_label(label: u32) -> Option<Self> {
        num::FromPrimitive::from_u32(label)
    }

    /// Like [`PlanId::from_label`], but unknown labels map to
    /// `FitnessMaintenance`.
    pub fn from_label_or_default(label: u32) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    pub fn label(self) -> u32 {
        self as u32
    }

    /// Zero-based position, for tables holding one entry per plan.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutPlan {
    pub category: String,
    pub intensity: String,
    pub frequency: String,
    pub focus: String,
    pub goal: String,
    pub workouts: Vec<String>,
    pub tips: Vec<String>,
    /// Day-by-day weekly schedule, Monday first.
    pub schedule: Vec<String>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn labels_round_trip() {
        for (i, plan_id) in PlanId::iter().enumerate() {
            assert_eq!(plan_id.label(), i as u32 + 1);
            assert_eq!(plan_id.index(), i);
            assert_eq!(PlanId::from_label(plan_id.label()), Some(plan_id));
        }
        assert_eq!(PlanId::COUNT, 7);
    }

    #[test]
    fn unknown_label_falls_back_to_maintenance() {
        for label in [0, 8, 99, u32::MAX] {
            assert_eq!(PlanId::from_label(label), None);
            assert_eq!(
                PlanId::from_label_or_default(label),
                PlanId::FitnessMaintenance
            );
        }
    }
}
