//! Plan templates drawn from the external catalog.
//!
//! Display fields are carried through untouched; only the matchable
//! attributes feed the scorers.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::profile::MAX_TRAINING_DAYS;
use crate::{FitnessLevel, TrainingGoal};

/// Highest difficulty rating a template may carry.
pub const MAX_DIFFICULTY_RATING: u8 = 5;

/// A predefined training plan with fixed structural attributes.
///
/// # Examples
/// ```
/// use planmatch_core::{FitnessLevel, PlanTemplate, TrainingGoal};
///
/// let template = PlanTemplate {
///     id: "starting_strength".into(),
///     plan_type: "strength".into(),
///     name: "Starting Strength".into(),
///     name_de: "Starting Strength".into(),
///     description: "Linear progression on the barbell basics.".into(),
///     description_de: "Lineare Progression mit den Langhantel-Grundübungen.".into(),
///     fitness_level: FitnessLevel::Beginner,
///     primary_goal: TrainingGoal::Strength,
///     days_per_week: 3,
///     min_training_experience_months: 0,
///     estimated_duration_weeks: 12,
///     difficulty_rating: 2,
///     created_at: None,
///     updated_at: None,
/// };
/// assert!(template.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanTemplate {
    /// Unique catalog identifier.
    pub id: String,
    /// Catalog category key.
    pub plan_type: String,
    /// Display name.
    pub name: String,
    /// German display name.
    pub name_de: String,
    /// Display description.
    pub description: String,
    /// German display description.
    pub description_de: String,
    /// Level the plan is written for.
    pub fitness_level: FitnessLevel,
    /// Goal the plan is written for.
    pub primary_goal: TrainingGoal,
    /// Training days the plan requires each week.
    pub days_per_week: u8,
    /// Experience required before starting the plan.
    pub min_training_experience_months: u32,
    /// Length of one full run through the plan.
    pub estimated_duration_weeks: u16,
    /// Ordinal difficulty from 1 (easiest) to 5.
    pub difficulty_rating: u8,
    /// Creation timestamp as stored by the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    /// Last update timestamp as stored by the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_at: Option<String>,
}

/// Errors returned by [`PlanTemplate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanTemplateError {
    /// The identifier was empty or whitespace.
    #[error("template id must not be empty")]
    EmptyId,
    /// Required days were zero or more than a week holds.
    #[error("days per week must be between 1 and 7 (got {days})")]
    InvalidDaysPerWeek {
        /// Value found on the template.
        days: u8,
    },
    /// Difficulty fell outside the `1..=5` scale.
    #[error("difficulty rating must be between 1 and 5 (got {rating})")]
    InvalidDifficulty {
        /// Value found on the template.
        rating: u8,
    },
    /// The plan had no duration.
    #[error("estimated duration must be at least one week")]
    ZeroDuration,
}

impl PlanTemplate {
    /// Check the structural invariants of a catalog entry.
    ///
    /// # Errors
    /// Returns the first [`PlanTemplateError`] found.
    pub fn validate(&self) -> Result<(), PlanTemplateError> {
        if self.id.trim().is_empty() {
            return Err(PlanTemplateError::EmptyId);
        }
        if !(1..=MAX_TRAINING_DAYS).contains(&self.days_per_week) {
            return Err(PlanTemplateError::InvalidDaysPerWeek {
                days: self.days_per_week,
            });
        }
        if !(1..=MAX_DIFFICULTY_RATING).contains(&self.difficulty_rating) {
            return Err(PlanTemplateError::InvalidDifficulty {
                rating: self.difficulty_rating,
            });
        }
        if self.estimated_duration_weeks == 0 {
            return Err(PlanTemplateError::ZeroDuration);
        }
        Ok(())
    }
}
