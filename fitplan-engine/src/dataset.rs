use std::{fs::File, io::Read, path::Path};

use fitplan_model::{
    metrics::{normalize_height, FeatureVector, Gender},
    plan::PlanId,
};
use itertools::Itertools;
use log::{debug, info};
use serde::Deserialize;

use crate::EngineError;

/// One row of the labelled dataset. Extra columns (BMI, BMI case) are
/// ignored.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Exercise Recommendation Plan")]
    plan: u32,
}

/// Encoded training data: one feature vector and plan label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<FeatureVector>,
    labels: Vec<u32>,
}

impl Dataset {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());
        let file = File::open(path).map_err(EngineError::io(path))?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, EngineError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut features = Vec::new();
        let mut labels = Vec::new();
        for (row_idx, result) in reader.deserialize::<DatasetRow>().enumerate() {
            let row = result?;
            // header is line 1
            let row_number = row_idx + 2;

            let gender = Gender::parse(&row.gender).map_err(|e| EngineError::InvalidRow {
                row: row_number,
                reason: e.to_string(),
            })?;
            let plan = PlanId::from_label(row.plan).ok_or_else(|| EngineError::InvalidRow {
                row: row_number,
                reason: format!("plan label {} is outside 1..7", row.plan),
            })?;

            features.push(FeatureVector::new(
                row.weight,
                normalize_height(row.height),
                row.age,
                gender,
            ));
            labels.push(plan.label());
        }

        if labels.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        debug!("Loaded {} dataset rows", labels.len());

        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Number of rows per plan label, in label order.
    pub fn label_counts(&self) -> Vec<(u32, usize)> {
        self.labels
            .iter()
            .copied()
            .counts()
            .into_iter()
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Weight,Height,Age,Gender,BMI,BMIcase,Exercise Recommendation Plan\n";

    fn parse(rows: &str) -> Result<Dataset, EngineError> {
        Dataset::from_reader(format!("{}{}", HEADER, rows).as_bytes())
    }

    #[test]
    fn rows_are_encoded() {
        let dataset = parse("70,1.75,30,Male,22.86,Normal,4\n48.5,160,22,female,18.95,Normal,4\n")
            .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.features()[0].as_slice(), &[70.0, 1.75, 30.0, 1.0]);
        assert_eq!(dataset.features()[1].as_slice(), &[48.5, 1.6, 22.0, 0.0]);
        assert_eq!(dataset.labels(), &[4, 4]);
    }

    #[test]
    fn invalid_rows_are_reported_with_line_number() {
        let test_data = [
            ("70,1.75,30,Male,22.86,Normal,4\n70,1.75,30,other,22.86,Normal,4\n", 3),
            ("70,1.75,30,Male,22.86,Normal,9\n", 2),
            ("70,1.75,30,Male,22.86,Normal,0\n", 2),
        ];

        for (i, (rows, expected_row)) in test_data.into_iter().enumerate() {
            match parse(rows) {
                Err(EngineError::InvalidRow { row, .. }) => {
                    assert_eq!(row, expected_row, "Test case #{}", i)
                }
                other => panic!("Test case #{}: unexpected {:?}", i, other),
            }
        }
    }

    #[test]
    fn unparseable_values_are_rejected() {
        assert!(matches!(
            parse("heavy,1.75,30,Male,22.86,Normal,4\n"),
            Err(EngineError::Csv(_))
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(parse(""), Err(EngineError::EmptyDataset)));
    }

    #[test]
    fn bundled_dataset_covers_every_plan() {
        let dataset =
            Dataset::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/final_dataset.csv"))
                .unwrap();

        assert_eq!(dataset.len(), 420);
        assert_eq!(
            dataset.label_counts(),
            (1..=7).map(|label| (label, 60)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            Dataset::from_path("does/not/exist.csv"),
            Err(EngineError::Io { .. })
        ));
    }
}
