use async_trait::async_trait;
use fitplan_model::report::{
    ErrorBody, HealthStatus, MetricsRequest, PredictResponse, PredictWorkoutRequest,
    PredictWorkoutResponse, Suggestions, SuggestionsRequest,
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn health(&self) -> Result<HealthStatus>;
    async fn predict_workout(&self, user_id: &str) -> Result<PredictWorkoutResponse>;
    async fn predict(&self, metrics: &MetricsRequest) -> Result<PredictResponse>;
    async fn workout_suggestions(&self, request: &SuggestionsRequest) -> Result<Suggestions>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;
        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());
    Err(status_error(status, message))
}

fn status_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::SERVICE_UNAVAILABLE => Error::ServiceUnavailable(message),
        status if status.is_client_error() => Error::RequestError(message),
        _ => Error::InternalServerError,
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn health(&self) -> Result<HealthStatus> {
        self.send(self.client.get(self.endpoint("health"))).await
    }

    async fn predict_workout(&self, user_id: &str) -> Result<PredictWorkoutResponse> {
        let body = PredictWorkoutRequest {
            user_id: Some(user_id.to_owned()),
        };
        self.send(self.client.post(self.endpoint("predict-workout")).json(&body))
            .await
    }

    async fn predict(&self, metrics: &MetricsRequest) -> Result<PredictResponse> {
        self.send(self.client.post(self.endpoint("predict")).json(metrics))
            .await
    }

    async fn workout_suggestions(&self, request: &SuggestionsRequest) -> Result<Suggestions> {
        self.send(
            self.client
                .post(self.endpoint("workout-suggestions"))
                .json(request),
        )
        .await
    }
}
