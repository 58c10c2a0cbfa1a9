//! Per-dimension match curves on the `0.0..=100.0` scale.
//!
//! Each function compares one profile attribute with one template attribute
//! and knows nothing about the others, so curves can be tested in isolation.
#![forbid(unsafe_code)]

use planmatch_core::{
    Eligibility, FitnessLevel, GoalRelation, MAX_SCORE, MIN_SCORE, TrainingGoal,
};

use crate::EligibilityGate;

/// Template one level milder than the user.
pub const LEVEL_ONE_STEP_MILDER: f32 = 60.0;
/// Template one level stricter than the user.
pub const LEVEL_ONE_STEP_STRICTER: f32 = 40.0;
/// Template two levels milder than the user.
pub const LEVEL_TWO_STEPS_MILDER: f32 = 15.0;

/// Template goal covers the requested goal and more.
pub const GOAL_SUPERSET: f32 = 70.0;
/// Template goal covers part of the requested goal.
pub const GOAL_SUBSET: f32 = 50.0;

/// Points lost per spare training day.
pub const SCHEDULE_SURPLUS_STEP: i16 = 15;
/// Lowest schedule score for a user with spare days.
pub const SCHEDULE_SURPLUS_FLOOR: i16 = 40;
/// Points lost per missing training day.
pub const SCHEDULE_DEFICIT_STEP: i16 = 40;

const FULL_CREDIT: i16 = 100;

/// Score the distance between the user's level and the template's target.
///
/// Overreach (a stricter template) costs more than undershoot at the same
/// distance.
#[must_use]
pub fn fitness_level_score(user: FitnessLevel, template: FitnessLevel) -> f32 {
    match user.steps_to(template) {
        0 => MAX_SCORE,
        -1 => LEVEL_ONE_STEP_MILDER,
        1 => LEVEL_ONE_STEP_STRICTER,
        steps if steps < 0 => LEVEL_TWO_STEPS_MILDER,
        _ => MIN_SCORE,
    }
}

/// Score how the template's goal relates to the requested one.
#[must_use]
pub const fn goal_score(requested: TrainingGoal, template: TrainingGoal) -> f32 {
    match requested.relation_to(template) {
        GoalRelation::Exact => MAX_SCORE,
        GoalRelation::Superset => GOAL_SUPERSET,
        GoalRelation::Subset => GOAL_SUBSET,
        GoalRelation::Unrelated => MIN_SCORE,
    }
}

/// Score available days against the days a template requires.
///
/// Missing days cost [`SCHEDULE_DEFICIT_STEP`] each down to zero; spare days
/// cost [`SCHEDULE_SURPLUS_STEP`] each down to [`SCHEDULE_SURPLUS_FLOOR`].
#[must_use]
pub fn schedule_score(available_days: u8, required_days: u8) -> f32 {
    let difference = i16::from(available_days) - i16::from(required_days);
    let points = match difference {
        0 => FULL_CREDIT,
        surplus if surplus > 0 => {
            (FULL_CREDIT - SCHEDULE_SURPLUS_STEP * surplus).max(SCHEDULE_SURPLUS_FLOOR)
        }
        deficit => (FULL_CREDIT + SCHEDULE_DEFICIT_STEP * deficit).max(0),
    };
    f32::from(points)
}

/// Apply the experience floor.
///
/// Meeting the floor earns full credit with no bonus for surplus; falling
/// short scores zero and is marked according to `gate`.
#[must_use]
pub fn eligibility_outcome(
    experience_months: u32,
    required_months: u32,
    gate: EligibilityGate,
) -> (f32, Eligibility) {
    if experience_months >= required_months {
        return (MAX_SCORE, Eligibility::Eligible);
    }
    let shortfall_months = required_months - experience_months;
    let eligibility = match gate {
        EligibilityGate::Hard => Eligibility::Excluded { shortfall_months },
        EligibilityGate::Soft { .. } => Eligibility::Penalised { shortfall_months },
    };
    (MIN_SCORE, eligibility)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FitnessLevel::Beginner, FitnessLevel::Beginner, 100.0)]
    #[case(FitnessLevel::Intermediate, FitnessLevel::Beginner, 60.0)]
    #[case(FitnessLevel::Intermediate, FitnessLevel::Advanced, 40.0)]
    #[case(FitnessLevel::Advanced, FitnessLevel::Beginner, 15.0)]
    #[case(FitnessLevel::Beginner, FitnessLevel::Advanced, 0.0)]
    fn level_curve(
        #[case] user: FitnessLevel,
        #[case] template: FitnessLevel,
        #[case] expected: f32,
    ) {
        assert!((fitness_level_score(user, template) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn overreach_never_beats_undershoot() {
        for user in FitnessLevel::ALL {
            for milder in FitnessLevel::ALL.iter().filter(|l| **l < user) {
                let distance = user.steps_to(*milder).unsigned_abs();
                for stricter in FitnessLevel::ALL.iter().filter(|l| **l > user) {
                    if user.steps_to(*stricter).unsigned_abs() == distance {
                        assert!(
                            fitness_level_score(user, *milder)
                                > fitness_level_score(user, *stricter)
                        );
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(TrainingGoal::Strength, TrainingGoal::Strength, 100.0)]
    #[case(TrainingGoal::Strength, TrainingGoal::Both, 70.0)]
    #[case(TrainingGoal::Both, TrainingGoal::Hypertrophy, 50.0)]
    #[case(TrainingGoal::Strength, TrainingGoal::Endurance, 0.0)]
    fn goal_curve(
        #[case] requested: TrainingGoal,
        #[case] template: TrainingGoal,
        #[case] expected: f32,
    ) {
        assert!((goal_score(requested, template) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(3, 3, 100.0)]
    #[case(4, 3, 85.0)]
    #[case(5, 3, 70.0)]
    #[case(7, 2, 40.0)]
    #[case(3, 4, 60.0)]
    #[case(2, 4, 20.0)]
    #[case(1, 6, 0.0)]
    fn schedule_curve(#[case] available: u8, #[case] required: u8, #[case] expected: f32) {
        assert!((schedule_score(available, required) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn deficit_costs_more_than_surplus(#[case] gap: u8) {
        let surplus = schedule_score(3 + gap, 3);
        let deficit = schedule_score(3, 3 + gap);
        assert!(
            deficit < surplus,
            "gap {gap}: {deficit} should be below {surplus}"
        );
    }

    #[rstest]
    fn meeting_the_floor_earns_no_bonus() {
        let (at_floor, _) = eligibility_outcome(12, 12, EligibilityGate::Hard);
        let (above_floor, eligibility) = eligibility_outcome(120, 12, EligibilityGate::Hard);
        assert!((at_floor - above_floor).abs() < f32::EPSILON);
        assert_eq!(eligibility, Eligibility::Eligible);
    }

    #[rstest]
    #[case(EligibilityGate::Hard, Eligibility::Excluded { shortfall_months: 34 })]
    #[case(EligibilityGate::soft(), Eligibility::Penalised { shortfall_months: 34 })]
    fn gate_marks_shortfall(#[case] gate: EligibilityGate, #[case] expected: Eligibility) {
        let (score, eligibility) = eligibility_outcome(2, 36, gate);
        assert!(score.abs() < f32::EPSILON);
        assert_eq!(eligibility, expected);
    }
}
