//! Score breakdowns and the recommendations built from them.
//!
//! Every number here sits on the common `0.0..=100.0` scale. The qualitative
//! [`MatchTier`] is derived from the total alone so presentation layers can
//! render "optimal/good/acceptable" without re-scoring.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PlanTemplate;

/// Lowest score on the common scale.
pub const MIN_SCORE: f32 = 0.0;
/// Highest score on the common scale.
pub const MAX_SCORE: f32 = 100.0;

/// Per-dimension sub-scores, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionScores {
    /// Distance between the user's and the template's fitness level.
    pub fitness_level: f32,
    /// Agreement between requested and targeted goal.
    pub goal: f32,
    /// Fit between available and required weekly days.
    pub schedule: f32,
    /// Whether the user meets the experience floor.
    pub eligibility: f32,
}

/// Outcome of the experience gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Eligibility {
    /// The user meets the experience floor.
    Eligible,
    /// The user is below the floor and the total was reduced.
    Penalised {
        /// Months of experience still missing.
        shortfall_months: u32,
    },
    /// The user is below the floor and the template must not be recommended.
    Excluded {
        /// Months of experience still missing.
        shortfall_months: u32,
    },
}

impl Eligibility {
    /// Report whether the template failed a hard gate.
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded { .. })
    }
}

/// Why a volume note was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VolumeReason {
    /// The user's level is above the level the template targets.
    LevelAboveTarget,
    /// The user's experience exceeds the template's floor by a wide margin.
    ExperienceAboveFloor,
}

/// Advice attached to a match without changing its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum VolumeNote {
    /// Run the template with extra sets or intensity.
    IncreaseVolume {
        /// Trigger for the note.
        reason: VolumeReason,
    },
}

/// Qualitative band a total score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MatchTier {
    /// Below [`MatchTier::ACCEPTABLE_THRESHOLD`].
    Poor,
    /// At least [`MatchTier::ACCEPTABLE_THRESHOLD`].
    Acceptable,
    /// At least [`MatchTier::GOOD_THRESHOLD`].
    Good,
    /// At least [`MatchTier::OPTIMAL_THRESHOLD`].
    Optimal,
}

impl MatchTier {
    /// Lowest total rated optimal.
    pub const OPTIMAL_THRESHOLD: f32 = 85.0;
    /// Lowest total rated good.
    pub const GOOD_THRESHOLD: f32 = 65.0;
    /// Lowest total rated acceptable.
    pub const ACCEPTABLE_THRESHOLD: f32 = 40.0;

    /// Band a total score.
    ///
    /// # Examples
    /// ```
    /// use planmatch_core::MatchTier;
    ///
    /// assert_eq!(MatchTier::from_score(100.0), MatchTier::Optimal);
    /// assert_eq!(MatchTier::from_score(65.0), MatchTier::Good);
    /// assert_eq!(MatchTier::from_score(f32::NAN), MatchTier::Poor);
    /// ```
    #[must_use]
    pub fn from_score(total: f32) -> Self {
        if total >= Self::OPTIMAL_THRESHOLD {
            Self::Optimal
        } else if total >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if total >= Self::ACCEPTABLE_THRESHOLD {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of scoring one template against one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateScore {
    /// Weighted total in `0.0..=100.0`.
    pub total_score: f32,
    /// Sub-scores the total was built from.
    pub dimensions: DimensionScores,
    /// Outcome of the experience gate.
    pub eligibility: Eligibility,
    /// Optional advice for users who outgrow the template.
    pub volume_note: Option<VolumeNote>,
}

impl TemplateScore {
    /// Qualitative band of the total.
    #[must_use]
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.total_score)
    }
}

/// A scored template returned to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRecommendation {
    /// The recommended template, unchanged from the catalog.
    pub template: PlanTemplate,
    /// Breakdown behind the recommendation.
    pub score: TemplateScore,
}

impl PlanRecommendation {
    /// Weighted total in `0.0..=100.0`.
    #[must_use]
    pub const fn total_score(&self) -> f32 {
        self.score.total_score
    }

    /// Qualitative band of the total.
    #[must_use]
    pub fn tier(&self) -> MatchTier {
        self.score.tier()
    }
}
