use std::{env, error::Error};

use dotenv::dotenv;
use fitplan_client::Client;

const DEFAULT_URL: &str = "http://localhost:5001";

async fn report(client: &dyn Client, user_id: &str) -> Result<String, Box<dyn Error>> {
    let response = client.predict_workout(user_id).await?;
    Ok(serde_json::to_string_pretty(&response)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let url = env::var("FITPLAN_URL").unwrap_or_else(|_| DEFAULT_URL.to_owned());
    let user_id = env::args()
        .nth(1)
        .ok_or("usage: predict-user <user_id>")?;

    let client = fitplan_client::create(url);
    println!("{}", report(&client, &user_id).await?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fitplan_client::{Error, MockClient};
    use fitplan_model::{
        bmi::BmiCategory,
        metrics::Gender,
        plan::WorkoutPlan,
        report::{PredictWorkoutResponse, UserSummary},
    };

    use super::*;

    fn response() -> PredictWorkoutResponse {
        PredictWorkoutResponse {
            user_data: UserSummary {
                name: "Jan".to_owned(),
                email: "".to_owned(),
                weight: 70.0,
                height: 1.75,
                age: 30,
                gender: Gender::Male,
                bmi: 22.86,
                bmi_category: BmiCategory::Normal,
                daily_calories: 2628,
            },
            workout_plan: WorkoutPlan {
                category: "Fitness Maintenance".to_owned(),
                intensity: "Moderate".to_owned(),
                frequency: "4-5 times per week".to_owned(),
                focus: "Balanced training".to_owned(),
                goal: "Maintain fitness".to_owned(),
                workouts: vec![],
                tips: vec![],
                schedule: vec![],
            },
            exercise_plan_id: 4,
            generated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn report_prints_prediction() {
        let mut client = MockClient::new();
        client
            .expect_predict_workout()
            .withf(|user_id| user_id == "a1")
            .returning(|_| Ok(response()));

        let report = report(&client, "a1").await.unwrap();

        assert!(report.contains("\"exercise_plan_id\": 4"));
        assert!(report.contains("\"bmi_category\": \"Normal\""));
        assert!(report.contains("2024-03-01T12:00:00Z"));
    }

    #[tokio::test]
    async fn report_passes_errors_through() {
        let mut client = MockClient::new();
        client
            .expect_predict_workout()
            .returning(|_| Err(Error::NotFound("User not found".to_owned())));

        let error = report(&client, "zz").await.unwrap_err();

        assert_eq!(error.to_string(), "not found: User not found");
    }
}
