use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use super::{
    bmi::BmiCategory,
    metrics::{Gender, MetricsError, UserMetrics},
    plan::WorkoutPlan,
    profile::Profile,
    recommendation::Recommendation,
};

/// Exercise lists keyed by workout type.
pub type Suggestions = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub store_connected: bool,
}

impl HealthStatus {
    pub fn new(model_loaded: bool, store_connected: bool) -> Self {
        let status = if model_loaded && store_connected {
            "healthy"
        } else {
            "degraded"
        };
        Self {
            status: status.to_owned(),
            model_loaded,
            store_connected,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictWorkoutRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub gender: Gender,
    pub bmi: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub bmi_category: BmiCategory,
    pub daily_calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictWorkoutResponse {
    pub user_data: UserSummary,
    pub workout_plan: WorkoutPlan,
    pub exercise_plan_id: u32,
    pub generated_at: DateTime<Utc>,
}

impl PredictWorkoutResponse {
    pub fn new(
        profile: &Profile,
        metrics: &UserMetrics,
        recommendation: Recommendation,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_data: UserSummary {
                name: profile.display_name().to_owned(),
                email: profile.email().to_owned(),
                weight: metrics.weight(),
                height: metrics.height_m(),
                age: metrics.age(),
                gender: metrics.gender(),
                bmi: recommendation.bmi,
                bmi_category: recommendation.bmi_category,
                daily_calories: recommendation.daily_calories,
            },
            workout_plan: recommendation.plan,
            exercise_plan_id: recommendation.plan_id.label(),
            generated_at,
        }
    }
}

/// Raw metrics as typed into the form. Missing fields are reported as
/// validation errors rather than body parse failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRequest {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl MetricsRequest {
    pub fn metrics(&self) -> Result<UserMetrics, MetricsError> {
        let weight = self.weight.ok_or(MetricsError::MissingField("Weight"))?;
        let height = self.height.ok_or(MetricsError::MissingField("Height"))?;
        let age = self.age.ok_or(MetricsError::MissingField("Age"))?;
        let gender = self
            .gender
            .as_deref()
            .ok_or(MetricsError::MissingField("Gender"))?;

        UserMetrics::new(weight, height, age, Gender::parse(gender)?)
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub gender: Gender,
    pub bmi: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub bmi_category: BmiCategory,
    pub daily_calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub metrics: MetricsSummary,
    pub workout_plan: WorkoutPlan,
    pub exercise_plan_id: u32,
    pub generated_at: DateTime<Utc>,
}

impl PredictResponse {
    pub fn new(
        metrics: &UserMetrics,
        recommendation: Recommendation,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            metrics: MetricsSummary {
                weight: metrics.weight(),
                height: metrics.height_m(),
                age: metrics.age(),
                gender: metrics.gender(),
                bmi: recommendation.bmi,
                bmi_category: recommendation.bmi_category,
                daily_calories: recommendation.daily_calories,
            },
            workout_plan: recommendation.plan,
            exercise_plan_id: recommendation.plan_id.label(),
            generated_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub workout_type: Option<String>,
}
