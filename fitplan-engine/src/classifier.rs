use fitplan_model::metrics::FeatureVector;
use log::{debug, info};
use smartcore::{
    ensemble::random_forest_classifier::{
        RandomForestClassifier, RandomForestClassifierParameters,
    },
    linalg::basic::matrix::DenseMatrix,
};

use crate::{dataset::Dataset, EngineError};

type Forest = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

#[mockall::automock]
pub trait Classifier: Send + Sync {
    /// Predicts the plan label for an encoded feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<u32, EngineError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestParameters {
    pub n_trees: u16,
    pub seed: u64,
}

impl Default for ForestParameters {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
        }
    }
}

/// Random forest trained once on the labelled dataset and read-only
/// afterwards.
pub struct ForestClassifier {
    forest: Forest,
}

impl ForestClassifier {
    pub fn train(dataset: &Dataset, parameters: ForestParameters) -> Result<Self, EngineError> {
        if parameters.n_trees == 0 {
            return Err(EngineError::Training(
                "a forest needs at least one tree".to_owned(),
            ));
        }
        info!(
            "Training random forest with {} trees (seed {}) on {} rows",
            parameters.n_trees,
            parameters.seed,
            dataset.len()
        );
        debug!("Label distribution: {:?}", dataset.label_counts());

        let rows: Vec<Vec<f64>> = dataset
            .features()
            .iter()
            .map(FeatureVector::to_vec)
            .collect();
        let x = DenseMatrix::from_2d_vec(&rows);
        let y = dataset.labels().to_vec();
        let forest = RandomForestClassifier::fit(
            &x,
            &y,
            RandomForestClassifierParameters::default()
                .with_n_trees(parameters.n_trees)
                .with_seed(parameters.seed),
        )
        .map_err(|e| EngineError::Training(e.to_string()))?;

        info!("Model trained");
        Ok(Self { forest })
    }
}

impl Classifier for ForestClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<u32, EngineError> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);
        self.forest
            .predict(&x)
            .map_err(|e| EngineError::Prediction(e.to_string()))?
            .first()
            .copied()
            .ok_or_else(|| EngineError::Prediction("no prediction returned".to_owned()))
    }
}
