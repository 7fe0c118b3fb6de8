use std::{fs, path::Path};

use fitplan_model::plan::{PlanId, WorkoutPlan};
use log::info;
use serde::Deserialize;
use strum::{EnumCount, IntoEnumIterator};

use crate::EngineError;

#[derive(Debug, Deserialize)]
struct PlanBookFile {
    plans: Vec<PlanRecord>,
}

#[derive(Debug, Deserialize)]
struct PlanRecord {
    id: u32,
    plan: WorkoutPlan,
}

/// One workout plan per [`PlanId`], loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanBook {
    plans: Vec<WorkoutPlan>,
}

impl PlanBook {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        info!("Loading workout plans from {}", path.display());
        let source = fs::read_to_string(path).map_err(EngineError::io(path))?;
        Self::from_ron(&source)
    }

    pub fn from_ron(source: &str) -> Result<Self, EngineError> {
        let file: PlanBookFile = ron::from_str(source)?;

        let mut slots: Vec<Option<WorkoutPlan>> = vec![None; PlanId::COUNT];
        for record in file.plans {
            let plan_id = PlanId::from_label(record.id).ok_or(EngineError::UnknownPlan(record.id))?;
            let slot = &mut slots[plan_id.index()];
            if slot.is_some() {
                return Err(EngineError::DuplicatePlan(record.id));
            }
            *slot = Some(record.plan);
        }

        let plans = PlanId::iter()
            .zip(slots)
            .map(|(plan_id, slot)| slot.ok_or(EngineError::MissingPlan(plan_id.label())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { plans })
    }

    pub fn get(&self, plan_id: PlanId) -> &WorkoutPlan {
        &self.plans[plan_id.index()]
    }

    /// Looks up the plan for a raw classifier label. Unknown labels resolve
    /// to the fitness maintenance plan.
    pub fn resolve(&self, label: u32) -> (PlanId, &WorkoutPlan) {
        let plan_id = PlanId::from_label_or_default(label);
        (plan_id, self.get(plan_id))
    }
}
