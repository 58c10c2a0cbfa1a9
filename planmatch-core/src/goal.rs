//! Training goals a plan is built around.
//!
//! `Both` covers strength and hypertrophy together, so it relates to either
//! goal without being equal to it.
//!
//! # Examples
//! ```
//! use planmatch_core::{GoalRelation, TrainingGoal};
//!
//! assert_eq!(
//!     TrainingGoal::Strength.relation_to(TrainingGoal::Both),
//!     GoalRelation::Superset,
//! );
//! assert_eq!(TrainingGoal::GeneralFitness.as_str(), "general_fitness");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome a user trains for, or the outcome a template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TrainingGoal {
    /// Maximal force production on the main lifts.
    Strength,
    /// Muscle growth.
    Hypertrophy,
    /// Broad conditioning without a specialised focus.
    GeneralFitness,
    /// Strength and hypertrophy combined.
    Both,
    /// Aerobic capacity and work tolerance.
    Endurance,
}

/// How a template's goal relates to the goal a user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalRelation {
    /// The goals are identical.
    Exact,
    /// The template covers the requested goal and more.
    Superset,
    /// The template covers only part of the requested goal.
    Subset,
    /// The goals do not overlap.
    Unrelated,
}

impl TrainingGoal {
    /// Every known goal.
    pub const ALL: [Self; 5] = [
        Self::Strength,
        Self::Hypertrophy,
        Self::GeneralFitness,
        Self::Both,
        Self::Endurance,
    ];

    /// Return the goal as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::GeneralFitness => "general_fitness",
            Self::Both => "both",
            Self::Endurance => "endurance",
        }
    }

    /// Classify `template` against `self`, the requested goal.
    ///
    /// # Examples
    /// ```
    /// use planmatch_core::{GoalRelation, TrainingGoal};
    ///
    /// assert_eq!(
    ///     TrainingGoal::Both.relation_to(TrainingGoal::Hypertrophy),
    ///     GoalRelation::Subset,
    /// );
    /// assert_eq!(
    ///     TrainingGoal::Endurance.relation_to(TrainingGoal::Strength),
    ///     GoalRelation::Unrelated,
    /// );
    /// ```
    #[must_use]
    pub const fn relation_to(self, template: Self) -> GoalRelation {
        match (self, template) {
            (Self::Strength, Self::Strength)
            | (Self::Hypertrophy, Self::Hypertrophy)
            | (Self::GeneralFitness, Self::GeneralFitness)
            | (Self::Both, Self::Both)
            | (Self::Endurance, Self::Endurance) => GoalRelation::Exact,
            (Self::Strength | Self::Hypertrophy, Self::Both) => GoalRelation::Superset,
            (Self::Both, Self::Strength | Self::Hypertrophy) => GoalRelation::Subset,
            _ => GoalRelation::Unrelated,
        }
    }
}

impl std::fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrainingGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "general_fitness" => Ok(Self::GeneralFitness),
            "both" => Ok(Self::Both),
            "endurance" => Ok(Self::Endurance),
            _ => Err(format!("unknown training goal '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn every_goal_matches_itself_exactly() {
        for goal in TrainingGoal::ALL {
            assert_eq!(goal.relation_to(goal), GoalRelation::Exact);
        }
    }

    #[rstest]
    #[case(TrainingGoal::Strength, TrainingGoal::Both, GoalRelation::Superset)]
    #[case(TrainingGoal::Hypertrophy, TrainingGoal::Both, GoalRelation::Superset)]
    #[case(TrainingGoal::Both, TrainingGoal::Strength, GoalRelation::Subset)]
    #[case(TrainingGoal::Strength, TrainingGoal::Hypertrophy, GoalRelation::Unrelated)]
    #[case(TrainingGoal::GeneralFitness, TrainingGoal::Both, GoalRelation::Unrelated)]
    #[case(TrainingGoal::Endurance, TrainingGoal::GeneralFitness, GoalRelation::Unrelated)]
    fn relations_between_goals(
        #[case] requested: TrainingGoal,
        #[case] template: TrainingGoal,
        #[case] expected: GoalRelation,
    ) {
        assert_eq!(requested.relation_to(template), expected);
    }

    #[rstest]
    fn round_trips_through_strings() {
        for goal in TrainingGoal::ALL {
            assert_eq!(TrainingGoal::from_str(goal.as_str()), Ok(goal));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = TrainingGoal::from_str("powerlifting").unwrap_err();
        assert!(err.contains("unknown training goal"));
    }
}
