use super::{
    bmi::BmiCategory,
    plan::{PlanId, WorkoutPlan},
};

/// Outcome of running a user's metrics through the classifier and the
/// post-processing steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub plan_id: PlanId,
    pub plan: WorkoutPlan,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub daily_calories: u32,
}
