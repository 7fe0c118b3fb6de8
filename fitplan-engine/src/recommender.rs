use fitplan_model::{
    bmi::{body_mass_index, daily_calories, ActivityLevel, BmiCategory},
    metrics::UserMetrics,
    plan::PlanId,
    recommendation::Recommendation,
};
use log::{debug, warn};

use crate::{classifier::Classifier, plans::PlanBook, EngineError};

/// The prediction pipeline: encode metrics, classify, then attach the plan,
/// BMI and calorie estimate.
pub struct Recommender {
    classifier: Box<dyn Classifier>,
    plans: PlanBook,
    activity_level: ActivityLevel,
}

impl Recommender {
    pub fn new(
        classifier: Box<dyn Classifier>,
        plans: PlanBook,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            classifier,
            plans,
            activity_level,
        }
    }

    pub fn recommend(&self, metrics: &UserMetrics) -> Result<Recommendation, EngineError> {
        let label = self.classifier.predict(&metrics.features())?;
        if PlanId::from_label(label).is_none() {
            warn!(
                "Classifier returned unknown plan {}, using {}",
                label,
                PlanId::default()
            );
        }
        let (plan_id, plan) = self.plans.resolve(label);

        // The category is taken from the rounded value, as displayed.
        let bmi = body_mass_index(metrics.weight(), metrics.height_m());
        let bmi_category = BmiCategory::from_bmi(bmi);
        let daily_calories = daily_calories(metrics, self.activity_level);
        debug!(
            "Predicted plan {} for BMI {} ({})",
            plan_id.label(),
            bmi,
            bmi_category
        );

        Ok(Recommendation {
            plan_id,
            plan: plan.clone(),
            bmi,
            bmi_category,
            daily_calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use fitplan_model::metrics::Gender;

    use super::*;
    use crate::classifier::MockClassifier;

    fn plans() -> PlanBook {
        PlanBook::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/plans.ron")).unwrap()
    }

    fn recommender(label: u32) -> Recommender {
        let mut classifier = MockClassifier::new();
        classifier.expect_predict().returning(move |_| Ok(label));
        Recommender::new(Box::new(classifier), plans(), ActivityLevel::default())
    }

    fn metrics() -> UserMetrics {
        UserMetrics::new(70.0, 1.75, 30, Gender::Male).unwrap()
    }

    #[test]
    fn recommendation_combines_plan_and_numbers() {
        let recommendation = recommender(4).recommend(&metrics()).unwrap();

        assert_eq!(recommendation.plan_id, PlanId::FitnessMaintenance);
        assert_eq!(recommendation.plan.category, "Fitness Maintenance");
        assert_eq!(recommendation.bmi, 22.86);
        assert_eq!(recommendation.bmi_category, BmiCategory::Normal);
        assert_eq!(recommendation.daily_calories, 2628);
    }

    #[test]
    fn predicted_label_selects_plan() {
        let recommendation = recommender(1).recommend(&metrics()).unwrap();

        assert_eq!(recommendation.plan_id, PlanId::WeightGain);
        assert_eq!(recommendation.plan.category, "Weight Gain Workouts");
    }

    #[test]
    fn unknown_label_falls_back_to_maintenance() {
        let recommendation = recommender(99).recommend(&metrics()).unwrap();

        assert_eq!(recommendation.plan_id, PlanId::FitnessMaintenance);
        assert_eq!(recommendation.plan.category, "Fitness Maintenance");
    }

    #[test]
    fn classifier_receives_encoded_features() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_predict()
            .withf(|features| features.as_slice() == [45.0, 1.7, 22.0, 0.0])
            .times(1)
            .returning(|_| Ok(1));
        let recommender =
            Recommender::new(Box::new(classifier), plans(), ActivityLevel::default());

        let metrics = UserMetrics::new(45.0, 170.0, 22, Gender::Female).unwrap();
        let recommendation = recommender.recommend(&metrics).unwrap();

        assert_eq!(recommendation.bmi, 15.57);
        assert_eq!(recommendation.bmi_category, BmiCategory::SevereThinness);
    }

    #[test]
    fn classifier_failure_is_propagated() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_predict()
            .returning(|_| Err(EngineError::Prediction("broken".to_owned())));
        let recommender =
            Recommender::new(Box::new(classifier), plans(), ActivityLevel::default());

        assert!(matches!(
            recommender.recommend(&metrics()),
            Err(EngineError::Prediction(_))
        ));
    }

    #[test]
    fn identical_requests_give_identical_recommendations() {
        let recommender = recommender(5);

        assert_eq!(
            recommender.recommend(&metrics()).unwrap(),
            recommender.recommend(&metrics()).unwrap()
        );
    }
}
