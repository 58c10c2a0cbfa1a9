use thiserror::Error;

use crate::{PlanRecommendation, PlanTemplate, PlanTemplateError, UserProfile, UserProfileError};

/// Errors returned by [`Recommender::recommend`].
///
/// An empty catalog, or one where every template fails the experience gate,
/// is not an error: both produce an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The profile holds values outside its domain.
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] UserProfileError),
    /// Fewer than one result was requested.
    #[error("limit must be at least 1 (got {limit})")]
    InvalidLimit {
        /// Requested limit.
        limit: usize,
    },
    /// A catalog entry broke its structural invariants.
    #[error("template '{id}' is invalid: {source}")]
    InvalidTemplate {
        /// Identifier of the offending template.
        id: String,
        /// The violated invariant.
        #[source]
        source: PlanTemplateError,
    },
    /// Two catalog entries share an identifier.
    #[error("template id '{id}' appears more than once in the catalog")]
    DuplicateTemplateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Produce a ranked, bounded list of templates for a profile.
///
/// Implementations must treat the catalog as read-only, reject invalid input
/// with [`RecommendError`] rather than panicking, and return at most `limit`
/// recommendations sorted by descending total score.
/// Recommenders must be `Send + Sync` to operate safely across threads.
pub trait Recommender: Send + Sync {
    /// Score `templates` for `profile` and return the best `limit` matches.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the profile, limit, or catalog is
    /// invalid. No partial results are returned.
    fn recommend(
        &self,
        profile: &UserProfile,
        templates: &[PlanTemplate],
        limit: usize,
    ) -> Result<Vec<PlanRecommendation>, RecommendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FitnessLevel, TrainingGoal};
    use rstest::rstest;

    struct EmptyRecommender;

    impl Recommender for EmptyRecommender {
        fn recommend(
            &self,
            profile: &UserProfile,
            _templates: &[PlanTemplate],
            limit: usize,
        ) -> Result<Vec<PlanRecommendation>, RecommendError> {
            profile.validate()?;
            if limit == 0 {
                return Err(RecommendError::InvalidLimit { limit });
            }
            Ok(Vec::new())
        }
    }

    fn profile(days: u8) -> UserProfile {
        UserProfile {
            fitness_level: FitnessLevel::Beginner,
            training_experience_months: 0,
            available_training_days: days,
            primary_goal: TrainingGoal::Strength,
        }
    }

    #[rstest]
    fn returns_empty_list_for_empty_catalog() {
        let result = EmptyRecommender.recommend(&profile(3), &[], 5);
        assert_eq!(result, Ok(Vec::new()));
    }

    #[rstest]
    fn profile_errors_convert_into_invalid_profile() {
        let err = EmptyRecommender
            .recommend(&profile(0), &[], 5)
            .expect_err("zero days");
        assert!(matches!(err, RecommendError::InvalidProfile(_)));
    }

    #[rstest]
    fn zero_limit_is_rejected() {
        let err = EmptyRecommender
            .recommend(&profile(3), &[], 0)
            .expect_err("zero limit");
        assert_eq!(err, RecommendError::InvalidLimit { limit: 0 });
    }
}
