//! User profiles: the fitness attributes recommendations are matched against.
//!
//! Profiles are validated on construction and again by recommenders so an
//! out-of-range value never reaches the scorers. Deserialisation goes through
//! [`UserProfileRecord`], which accepts raw strings and signed integers and
//! reports unknown or negative values as [`UserProfileError`]s.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FitnessLevel, TrainingGoal};

/// Largest number of training days a week can hold.
pub const MAX_TRAINING_DAYS: u8 = 7;

/// Fitness attributes of the user requesting recommendations.
///
/// # Examples
/// ```
/// use planmatch_core::{FitnessLevel, TrainingGoal, UserProfile};
///
/// # fn main() -> Result<(), planmatch_core::UserProfileError> {
/// let profile = UserProfile::new(FitnessLevel::Beginner, 2, 3, TrainingGoal::Strength)?;
/// assert_eq!(profile.available_training_days, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "UserProfileRecord")
)]
pub struct UserProfile {
    /// Self-reported training maturity.
    pub fitness_level: FitnessLevel,
    /// Months of consistent structured training.
    pub training_experience_months: u32,
    /// Days per week the user can train.
    pub available_training_days: u8,
    /// Outcome the user is training for.
    pub primary_goal: TrainingGoal,
}

/// Errors raised when a profile holds values outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserProfileError {
    /// The fitness level is not one of the known levels.
    #[error("unknown fitness level '{value}'")]
    UnknownFitnessLevel {
        /// Value supplied by the caller.
        value: String,
    },
    /// The goal is not one of the known goals.
    #[error("unknown training goal '{value}'")]
    UnknownGoal {
        /// Value supplied by the caller.
        value: String,
    },
    /// Training experience was negative.
    #[error("training experience must not be negative (got {months} months)")]
    NegativeExperience {
        /// Value supplied by the caller.
        months: i64,
    },
    /// Training experience does not fit the supported range.
    #[error("training experience of {months} months is out of range")]
    ExperienceOutOfRange {
        /// Value supplied by the caller.
        months: i64,
    },
    /// Available days were zero or more than a week holds.
    #[error("available training days must be between 1 and 7 (got {days})")]
    InvalidTrainingDays {
        /// Value supplied by the caller.
        days: i64,
    },
}

impl UserProfile {
    /// Validate and construct a [`UserProfile`].
    ///
    /// # Errors
    /// Returns [`UserProfileError::InvalidTrainingDays`] when
    /// `available_training_days` is outside `1..=7`.
    pub fn new(
        fitness_level: FitnessLevel,
        training_experience_months: u32,
        available_training_days: u8,
        primary_goal: TrainingGoal,
    ) -> Result<Self, UserProfileError> {
        let profile = Self {
            fitness_level,
            training_experience_months,
            available_training_days,
            primary_goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the invariants of a profile built by hand.
    ///
    /// # Errors
    /// Returns [`UserProfileError::InvalidTrainingDays`] when
    /// `available_training_days` is outside `1..=7`.
    pub fn validate(&self) -> Result<(), UserProfileError> {
        if (1..=MAX_TRAINING_DAYS).contains(&self.available_training_days) {
            Ok(())
        } else {
            Err(UserProfileError::InvalidTrainingDays {
                days: i64::from(self.available_training_days),
            })
        }
    }
}

/// Unvalidated profile as received from upstream profile management.
///
/// # Examples
/// ```
/// use planmatch_core::{UserProfile, UserProfileError, UserProfileRecord};
///
/// let record = UserProfileRecord {
///     fitness_level: "expert".into(),
///     training_experience_months: 12,
///     available_training_days: 3,
///     primary_goal: "strength".into(),
/// };
/// let err = UserProfile::try_from(record).unwrap_err();
/// assert!(matches!(err, UserProfileError::UnknownFitnessLevel { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfileRecord {
    /// Fitness level name.
    pub fitness_level: String,
    /// Months of training experience.
    pub training_experience_months: i64,
    /// Days per week available for training.
    pub available_training_days: i64,
    /// Goal name.
    pub primary_goal: String,
}

impl TryFrom<UserProfileRecord> for UserProfile {
    type Error = UserProfileError;

    fn try_from(record: UserProfileRecord) -> Result<Self, Self::Error> {
        let fitness_level = record.fitness_level.parse::<FitnessLevel>().map_err(|_| {
            UserProfileError::UnknownFitnessLevel {
                value: record.fitness_level.clone(),
            }
        })?;
        let primary_goal = record.primary_goal.parse::<TrainingGoal>().map_err(|_| {
            UserProfileError::UnknownGoal {
                value: record.primary_goal.clone(),
            }
        })?;
        let months = record.training_experience_months;
        if months < 0 {
            return Err(UserProfileError::NegativeExperience { months });
        }
        let training_experience_months = u32::try_from(months)
            .map_err(|_| UserProfileError::ExperienceOutOfRange { months })?;
        let days = record.available_training_days;
        let available_training_days =
            u8::try_from(days).map_err(|_| UserProfileError::InvalidTrainingDays { days })?;

        Self::new(
            fitness_level,
            training_experience_months,
            available_training_days,
            primary_goal,
        )
    }
}

impl From<UserProfile> for UserProfileRecord {
    fn from(profile: UserProfile) -> Self {
        Self {
            fitness_level: profile.fitness_level.as_str().to_owned(),
            training_experience_months: i64::from(profile.training_experience_months),
            available_training_days: i64::from(profile.available_training_days),
            primary_goal: profile.primary_goal.as_str().to_owned(),
        }
    }
}
