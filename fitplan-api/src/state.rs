use fitplan_db::{
    profile::{ProfileRepository, ProfileRepositoryImpl},
    Connection,
};
use fitplan_engine::{
    classifier::ForestClassifier, dataset::Dataset, plans::PlanBook, recommender::Recommender,
    suggestions::SuggestionTable, EngineError,
};
use fitplan_model::report::HealthStatus;
use log::{error, info};

use crate::{config::Settings, error::ApiError};

/// Everything the handlers share. The model and the profile store may be
/// missing, in which case the endpoints that need them answer with 503.
pub struct AppState {
    recommender: Option<Recommender>,
    profiles: Option<Box<dyn ProfileRepository>>,
    suggestions: SuggestionTable,
}

impl AppState {
    pub fn new(
        recommender: Option<Recommender>,
        profiles: Option<Box<dyn ProfileRepository>>,
        suggestions: SuggestionTable,
    ) -> Self {
        Self {
            recommender,
            profiles,
            suggestions,
        }
    }

    /// Loads the reference data, trains the model and connects to the
    /// profile store. Only broken plan or suggestion files are fatal.
    pub async fn initialize(settings: &Settings) -> Result<Self, EngineError> {
        let plans = PlanBook::from_path(&settings.plans_path)?;
        let suggestions = SuggestionTable::from_path(&settings.suggestions_path)?;

        let recommender = match Dataset::from_path(&settings.dataset_path)
            .and_then(|dataset| ForestClassifier::train(&dataset, settings.forest))
        {
            Ok(classifier) => Some(Recommender::new(
                Box::new(classifier),
                plans,
                settings.activity_level,
            )),
            Err(e) => {
                error!("Model unavailable: {}", e);
                None
            }
        };

        info!("Connecting to database");
        let profiles = match Connection::establish().await {
            Ok(connection) => {
                Some(Box::new(ProfileRepositoryImpl::new(connection)) as Box<dyn ProfileRepository>)
            }
            Err(e) => {
                error!("Profile store unavailable: {}", e);
                None
            }
        };

        Ok(Self::new(recommender, profiles, suggestions))
    }

    pub fn recommender(&self) -> Result<&Recommender, ApiError> {
        self.recommender.as_ref().ok_or(ApiError::ModelUnavailable)
    }

    pub fn profiles(&self) -> Result<&dyn ProfileRepository, ApiError> {
        self.profiles
            .as_deref()
            .ok_or(ApiError::StoreUnavailable)
    }

    pub fn suggestions(&self) -> &SuggestionTable {
        &self.suggestions
    }

    pub async fn health(&self) -> HealthStatus {
        let store_connected = match &self.profiles {
            Some(profiles) => profiles.ping().await,
            None => false,
        };
        HealthStatus::new(self.recommender.is_some(), store_connected)
    }
}
