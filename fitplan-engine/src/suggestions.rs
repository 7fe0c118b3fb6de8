use std::{fs, path::Path};

use fitplan_model::report::Suggestions;
use log::info;
use rustc_hash::FxHashMap;

use crate::EngineError;

pub const DEFAULT_CATEGORY: &str = "Fitness Maintenance";
pub const ALL_TYPES: &str = "all";

/// Exercise suggestions per plan category, broken down by workout type.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionTable {
    categories: FxHashMap<String, Suggestions>,
    fallback: Suggestions,
}

impl SuggestionTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        info!("Loading workout suggestions from {}", path.display());
        let source = fs::read_to_string(path).map_err(EngineError::io(path))?;
        Self::from_ron(&source)
    }

    pub fn from_ron(source: &str) -> Result<Self, EngineError> {
        let categories: FxHashMap<String, Suggestions> = ron::from_str(source)?;
        let fallback = categories
            .get(DEFAULT_CATEGORY)
            .cloned()
            .ok_or_else(|| EngineError::MissingCategory(DEFAULT_CATEGORY.to_owned()))?;

        Ok(Self {
            categories,
            fallback,
        })
    }

    /// Suggestions for `category`, falling back to fitness maintenance.
    /// Without a workout type, or with `all`, every type is returned.
    /// Otherwise only the requested type is, keyed exactly as requested,
    /// with an empty list if the category has no such type. Type names are
    /// case-sensitive.
    pub fn suggest(&self, category: Option<&str>, workout_type: Option<&str>) -> Suggestions {
        let sections = category
            .and_then(|category| self.categories.get(category.trim()))
            .unwrap_or(&self.fallback);

        match workout_type {
            None | Some(ALL_TYPES) => sections.clone(),
            Some(workout_type) => {
                let exercises = sections.get(workout_type).cloned().unwrap_or_default();
                Suggestions::from([(workout_type.to_owned(), exercises)])
            }
        }
    }
}
