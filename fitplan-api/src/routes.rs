use actix_cors::Cors;
use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use chrono::Utc;
use fitplan_model::report::{
    MetricsRequest, PredictResponse, PredictWorkoutRequest, PredictWorkoutResponse,
    SuggestionsRequest,
};
use log::{debug, info};

use crate::{
    error::{json_error_handler, ApiError},
    state::AppState,
};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(index)
        .service(health)
        .service(predict_workout)
        .service(predict)
        .service(workout_suggestions);
}

pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/health")]
async fn health(state: web::Data<AppState>) -> impl Responder {
    web::Json(state.health().await)
}

#[post("/predict-workout")]
async fn predict_workout(
    state: web::Data<AppState>,
    request: web::Json<PredictWorkoutRequest>,
) -> Result<web::Json<PredictWorkoutResponse>, ApiError> {
    let recommender = state.recommender()?;
    let user_id = request
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|user_id| !user_id.is_empty())
        .ok_or_else(|| ApiError::InvalidInput("user_id is required".to_owned()))?;

    info!("Predicting workout plan for user {}", user_id);
    let profile = state
        .profiles()?
        .find_profile(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))?;
    let metrics = profile.metrics()?;
    let recommendation = recommender.recommend(&metrics)?;

    Ok(web::Json(PredictWorkoutResponse::new(
        &profile,
        &metrics,
        recommendation,
        Utc::now(),
    )))
}

#[post("/predict")]
async fn predict(
    state: web::Data<AppState>,
    request: web::Json<MetricsRequest>,
) -> Result<web::Json<PredictResponse>, ApiError> {
    let recommender = state.recommender()?;
    let metrics = request.metrics()?;
    debug!("Predicting workout plan for {:?}", metrics);
    let recommendation = recommender.recommend(&metrics)?;

    Ok(web::Json(PredictResponse::new(
        &metrics,
        recommendation,
        Utc::now(),
    )))
}

#[post("/workout-suggestions")]
async fn workout_suggestions(
    state: web::Data<AppState>,
    request: web::Json<SuggestionsRequest>,
) -> impl Responder {
    web::Json(
        state
            .suggestions()
            .suggest(request.category.as_deref(), request.workout_type.as_deref()),
    )
}
