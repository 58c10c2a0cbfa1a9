//! Fitness levels ordered from least to most trained.
//!
//! The enum is ordered so scorers can measure how far a template's target
//! level sits from the user's own.
//!
//! # Examples
//! ```
//! use planmatch_core::FitnessLevel;
//!
//! assert!(FitnessLevel::Beginner < FitnessLevel::Advanced);
//! assert_eq!(FitnessLevel::Intermediate.to_string(), "intermediate");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Training maturity of a user or the intended audience of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FitnessLevel {
    /// New to structured training.
    Beginner,
    /// Consistent training with established technique.
    Intermediate,
    /// Long-term training requiring periodised programming.
    Advanced,
}

impl FitnessLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Return the level as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use planmatch_core::FitnessLevel;
    ///
    /// assert_eq!(FitnessLevel::Advanced.as_str(), "advanced");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Position of the level on the ordered scale, starting at zero.
    #[must_use]
    pub const fn rank(self) -> i8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Signed number of steps from `self` to `target`.
    ///
    /// Positive values mean `target` is stricter than `self`.
    ///
    /// # Examples
    /// ```
    /// use planmatch_core::FitnessLevel;
    ///
    /// assert_eq!(FitnessLevel::Beginner.steps_to(FitnessLevel::Advanced), 2);
    /// assert_eq!(FitnessLevel::Advanced.steps_to(FitnessLevel::Intermediate), -1);
    /// ```
    #[must_use]
    pub const fn steps_to(self, target: Self) -> i8 {
        target.rank() - self.rank()
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown fitness level '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(FitnessLevel::Beginner, FitnessLevel::Beginner, 0)]
    #[case(FitnessLevel::Beginner, FitnessLevel::Intermediate, 1)]
    #[case(FitnessLevel::Intermediate, FitnessLevel::Beginner, -1)]
    #[case(FitnessLevel::Advanced, FitnessLevel::Beginner, -2)]
    fn steps_follow_ordering(
        #[case] from: FitnessLevel,
        #[case] to: FitnessLevel,
        #[case] expected: i8,
    ) {
        assert_eq!(from.steps_to(to), expected);
    }

    #[rstest]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            FitnessLevel::from_str(" Advanced "),
            Ok(FitnessLevel::Advanced)
        );
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = FitnessLevel::from_str("elite").unwrap_err();
        assert!(err.contains("unknown fitness level"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for level in FitnessLevel::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
