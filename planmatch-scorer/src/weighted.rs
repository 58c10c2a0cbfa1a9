//! Weighted scoring that combines the match dimensions into one total.
//!
//! The scorer runs every dimension curve, blends the sub-scores with the
//! configured [`DimensionWeights`](crate::DimensionWeights), applies the soft
//! eligibility penalty when configured, and attaches a volume note for users
//! who have outgrown the template. The note never changes the number.

#![forbid(unsafe_code)]

use planmatch_core::{
    DimensionScores, Eligibility, PlanTemplate, Scorer, TemplateScore, UserProfile, VolumeNote,
    VolumeReason,
};

use crate::dimensions::{eligibility_outcome, fitness_level_score, goal_score, schedule_score};
use crate::{EligibilityGate, ScorerConfig, ScorerConfigError};

/// Scorer that blends per-dimension matches with a static weight table.
///
/// # Examples
/// ```
/// use planmatch_core::{FitnessLevel, MatchTier, Scorer, TrainingGoal, UserProfile};
/// use planmatch_core::test_support::{mock_templates, STARTING_STRENGTH};
/// use planmatch_scorer::WeightedScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let profile = UserProfile::new(FitnessLevel::Beginner, 2, 3, TrainingGoal::Strength)?;
/// let templates = mock_templates();
/// let starting_strength = templates.get(STARTING_STRENGTH).ok_or("missing template")?;
///
/// let score = WeightedScorer::new().score(starting_strength, &profile);
/// assert_eq!(score.tier(), MatchTier::Optimal);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    config: ScorerConfig,
}

impl WeightedScorer {
    /// Construct a scorer with the default weights and a hard gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError`] when the weights or the gate are invalid.
    pub fn with_config(config: ScorerConfig) -> Result<Self, ScorerConfigError> {
        let validated = config.validate()?;
        Ok(Self { config: validated })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn dimensions(
        &self,
        template: &PlanTemplate,
        profile: &UserProfile,
    ) -> (DimensionScores, Eligibility) {
        let (eligibility_score, eligibility) = eligibility_outcome(
            profile.training_experience_months,
            template.min_training_experience_months,
            self.config.gate,
        );
        let dimensions = DimensionScores {
            fitness_level: fitness_level_score(profile.fitness_level, template.fitness_level),
            goal: goal_score(profile.primary_goal, template.primary_goal),
            schedule: schedule_score(profile.available_training_days, template.days_per_week),
            eligibility: eligibility_score,
        };
        (dimensions, eligibility)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "soft gating scales the blended total"
    )]
    fn apply_gate(&self, blended: f32, eligibility: Eligibility) -> f32 {
        match (eligibility, self.config.gate) {
            (Eligibility::Penalised { .. }, EligibilityGate::Soft { penalty_factor }) => {
                blended * penalty_factor
            }
            _ => blended,
        }
    }

    fn volume_note(&self, template: &PlanTemplate, profile: &UserProfile) -> Option<VolumeNote> {
        let reason = if profile.fitness_level > template.fitness_level {
            VolumeReason::LevelAboveTarget
        } else if profile.training_experience_months
            >= template
                .min_training_experience_months
                .saturating_add(self.config.volume_note_margin_months)
        {
            VolumeReason::ExperienceAboveFloor
        } else {
            return None;
        };
        Some(VolumeNote::IncreaseVolume { reason })
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, template: &PlanTemplate, profile: &UserProfile) -> TemplateScore {
        let (raw, eligibility) = self.dimensions(template, profile);
        let dimensions = DimensionScores {
            fitness_level: Self::sanitise(raw.fitness_level),
            goal: Self::sanitise(raw.goal),
            schedule: Self::sanitise(raw.schedule),
            eligibility: Self::sanitise(raw.eligibility),
        };
        let blended = self.config.weights.blend(&dimensions);
        let total_score = Self::sanitise(self.apply_gate(blended, eligibility));
        if !matches!(eligibility, Eligibility::Eligible) {
            log::trace!(
                "template {} below experience floor for profile: {eligibility:?}",
                template.id
            );
        }
        TemplateScore {
            total_score,
            dimensions,
            eligibility,
            volume_note: self.volume_note(template, profile),
        }
    }
}
