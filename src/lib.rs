//! Facade crate for the planmatch training-plan recommendation engine.
//!
//! This crate re-exports the core domain types, the weighted scorer and the
//! ranking recommender, and offers [`top_recommendations`] for callers that
//! want the default configuration.
//!
//! ```
//! use planmatch::{FitnessLevel, TrainingGoal, UserProfile, top_recommendations};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = UserProfile::new(FitnessLevel::Beginner, 2, 3, TrainingGoal::Strength)?;
//! let recommendations = top_recommendations(&profile, &[], 5)?;
//! assert!(recommendations.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use planmatch_core::{
    DimensionScores, Eligibility, FitnessLevel, GoalRelation, MAX_DIFFICULTY_RATING, MAX_SCORE,
    MAX_TRAINING_DAYS, MIN_SCORE, MatchTier, PlanRecommendation, PlanTemplate, PlanTemplateError,
    RecommendError, Recommender, Scorer, TemplateScore, TrainingGoal, UserProfile,
    UserProfileError, UserProfileRecord, VolumeNote, VolumeReason,
};
pub use planmatch_ranker::{RankerConfig, RankerConfigError, RankingRecommender};
pub use planmatch_scorer::{
    DimensionWeights, EligibilityGate, ScorerConfig, ScorerConfigError, WeightedScorer,
};

/// Rank `templates` for `profile` with the default weights, the hard
/// experience gate and no exclusion floor.
///
/// # Errors
/// Returns [`RecommendError`] when `limit` is zero, the profile is out of
/// domain, or the catalog holds an invalid or duplicated template.
pub fn top_recommendations(
    profile: &UserProfile,
    templates: &[PlanTemplate],
    limit: usize,
) -> Result<Vec<PlanRecommendation>, RecommendError> {
    RankingRecommender::new(WeightedScorer::new()).recommend(profile, templates, limit)
}
