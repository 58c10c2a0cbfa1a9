//! Score plan templates for a user profile.
//!
//! The `Scorer` trait assigns a [`TemplateScore`](crate::TemplateScore) to a
//! [`PlanTemplate`](crate::PlanTemplate) given the requesting
//! [`UserProfile`](crate::UserProfile).

use crate::{MAX_SCORE, MIN_SCORE, PlanTemplate, TemplateScore, UserProfile};

/// Calculate a match score for a plan template.
///
/// Higher totals indicate a better match between the template and the
/// profile. Implementations must be thread-safe (`Send` + `Sync`) so one
/// scorer can serve concurrent requests. Scoring is infallible and pure: the
/// same template and profile always produce the same score.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) totals and sub-scores.
/// - Keep every value within `0.0..=100.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use planmatch_core::{
///     DimensionScores, Eligibility, FitnessLevel, PlanTemplate, Scorer, TemplateScore,
///     TrainingGoal, UserProfile,
/// };
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _template: &PlanTemplate, _profile: &UserProfile) -> TemplateScore {
///         TemplateScore {
///             total_score: Self::sanitise(140.0),
///             dimensions: DimensionScores::default(),
///             eligibility: Eligibility::Eligible,
///             volume_note: None,
///         }
///     }
/// }
///
/// # fn main() -> Result<(), planmatch_core::UserProfileError> {
/// let profile = UserProfile::new(FitnessLevel::Beginner, 0, 3, TrainingGoal::Strength)?;
/// # let template = PlanTemplate {
/// #     id: "t".into(), plan_type: "strength".into(), name: "T".into(),
/// #     name_de: "T".into(), description: String::new(), description_de: String::new(),
/// #     fitness_level: FitnessLevel::Beginner, primary_goal: TrainingGoal::Strength,
/// #     days_per_week: 3, min_training_experience_months: 0,
/// #     estimated_duration_weeks: 8, difficulty_rating: 1,
/// #     created_at: None, updated_at: None,
/// # };
/// assert_eq!(FlatScorer.score(&template, &profile).total_score, 100.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of `template` according to `profile`.
    fn score(&self, template: &PlanTemplate, profile: &UserProfile) -> TemplateScore;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return MIN_SCORE;
        }
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}
