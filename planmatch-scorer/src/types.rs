//! Public configuration types for weighted template scoring.
#![forbid(unsafe_code)]

use planmatch_core::DimensionScores;

use crate::ScorerConfigError;

/// Penalty factor applied by [`EligibilityGate::Soft`] unless configured.
pub const DEFAULT_SOFT_PENALTY_FACTOR: f32 = 0.5;

/// Experience surplus over a template's floor that triggers a volume note.
pub const DEFAULT_VOLUME_NOTE_MARGIN_MONTHS: u32 = 24;

/// Relative weighting of the match dimensions.
///
/// The table is kept apart from the dimension scorers so weights can be
/// tuned without touching scoring curves. Weights need not sum to one: the
/// blend divides by their total.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimensionWeights {
    /// Multiplier applied to the fitness-level sub-score.
    pub fitness_level: f32,
    /// Multiplier applied to the goal sub-score.
    pub goal: f32,
    /// Multiplier applied to the schedule sub-score.
    pub schedule: f32,
    /// Multiplier applied to the eligibility sub-score.
    pub eligibility: f32,
}

impl DimensionWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when any value is not
    /// finite or is negative, or when the total weight is zero or overflows.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerConfigError::InvalidWeights)
        }
    }

    fn is_valid(self) -> bool {
        let values = self.values();
        let total = self.total();
        values.iter().all(|w| w.is_finite() && *w >= 0.0_f32)
            && total.is_finite()
            && total > 0.0_f32
    }

    const fn values(self) -> [f32; 4] {
        [self.fitness_level, self.goal, self.schedule, self.eligibility]
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(self) -> f32 {
        self.values().iter().sum()
    }

    /// Combine sub-scores into a weighted average on the same scale.
    ///
    /// Returns `0.0` when the weight total is zero or not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    #[must_use]
    pub fn blend(self, dimensions: &DimensionScores) -> f32 {
        let total = self.total();
        if !(total.is_finite() && total > 0.0_f32) {
            return 0.0_f32;
        }
        dimensions.fitness_level * (self.fitness_level / total)
            + dimensions.goal * (self.goal / total)
            + dimensions.schedule * (self.schedule / total)
            + dimensions.eligibility * (self.eligibility / total)
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            fitness_level: 0.35_f32,
            goal: 0.35_f32,
            schedule: 0.20_f32,
            eligibility: 0.10_f32,
        }
    }
}

/// Policy for templates whose experience floor the user has not reached.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum EligibilityGate {
    /// Mark the template excluded so recommenders omit it.
    #[default]
    Hard,
    /// Keep the template but multiply its total by `penalty_factor`.
    Soft {
        /// Multiplier in `0.0..=1.0` applied to the blended total.
        penalty_factor: f32,
    },
}

impl EligibilityGate {
    /// Soft gate with [`DEFAULT_SOFT_PENALTY_FACTOR`].
    #[must_use]
    pub const fn soft() -> Self {
        Self::Soft {
            penalty_factor: DEFAULT_SOFT_PENALTY_FACTOR,
        }
    }

    /// Validate the gate and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidPenaltyFactor`] when a soft gate's
    /// factor is not finite or lies outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        match self {
            Self::Hard => Ok(self),
            Self::Soft { penalty_factor }
                if penalty_factor.is_finite() && (0.0..=1.0).contains(&penalty_factor) =>
            {
                Ok(self)
            }
            Self::Soft { .. } => Err(ScorerConfigError::InvalidPenaltyFactor),
        }
    }

    /// Name of the policy as accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft { .. } => "soft",
        }
    }
}

impl std::str::FromStr for EligibilityGate {
    type Err = ScorerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::soft()),
            _ => Err(ScorerConfigError::UnknownGate {
                value: s.to_owned(),
            }),
        }
    }
}

/// Complete configuration of a [`WeightedScorer`](crate::WeightedScorer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Dimension weight table.
    pub weights: DimensionWeights,
    /// Experience gate policy.
    pub gate: EligibilityGate,
    /// Experience surplus, in months, that earns a volume note.
    pub volume_note_margin_months: u32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            gate: EligibilityGate::default(),
            volume_note_margin_months: DEFAULT_VOLUME_NOTE_MARGIN_MONTHS,
        }
    }
}

impl ScorerConfig {
    /// Validate every part of the configuration and return a copy.
    ///
    /// # Errors
    /// Propagates [`DimensionWeights::validate`] and
    /// [`EligibilityGate::validate`] failures.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        self.weights.validate()?;
        self.gate.validate()?;
        Ok(self)
    }
}
