//! Test-only catalog fixtures and scorers used by unit, behaviour and
//! property tests across the workspace.

use crate::{
    DimensionScores, Eligibility, FitnessLevel, PlanTemplate, Scorer, TemplateScore,
    TrainingGoal, UserProfile,
};

/// Number of templates returned by [`mock_templates`].
pub const MOCK_TEMPLATE_COUNT: usize = 8;

/// Index of "Starting Strength" (beginner, strength, 3 days) in [`mock_templates`].
pub const STARTING_STRENGTH: usize = 0;

/// Index of "5/3/1 Advanced" (advanced, strength, 4 days, 36 months) in
/// [`mock_templates`].
pub const WENDLER_ADVANCED: usize = 7;

/// Build a valid template with neutral display fields.
///
/// Difficulty defaults to 3 and duration to 12 weeks; adjust the public
/// fields for scenarios that need other values.
#[must_use]
pub fn sample_template(
    id: &str,
    fitness_level: FitnessLevel,
    primary_goal: TrainingGoal,
    days_per_week: u8,
    min_training_experience_months: u32,
) -> PlanTemplate {
    PlanTemplate {
        id: id.to_owned(),
        plan_type: primary_goal.as_str().to_owned(),
        name: id.to_owned(),
        name_de: id.to_owned(),
        description: String::new(),
        description_de: String::new(),
        fitness_level,
        primary_goal,
        days_per_week,
        min_training_experience_months,
        estimated_duration_weeks: 12,
        difficulty_rating: 3,
        created_at: None,
        updated_at: None,
    }
}

struct MockEntry {
    id: &'static str,
    plan_type: &'static str,
    name: &'static str,
    name_de: &'static str,
    description: &'static str,
    description_de: &'static str,
    fitness_level: FitnessLevel,
    primary_goal: TrainingGoal,
    days_per_week: u8,
    min_months: u32,
    weeks: u16,
    difficulty: u8,
}

const MOCK_CATALOG: [MockEntry; MOCK_TEMPLATE_COUNT] = [
    MockEntry {
        id: "starting_strength",
        plan_type: "strength",
        name: "Starting Strength",
        name_de: "Starting Strength",
        description: "Linear progression on squat, press and deadlift.",
        description_de: "Lineare Progression mit Kniebeuge, Drücken und Kreuzheben.",
        fitness_level: FitnessLevel::Beginner,
        primary_goal: TrainingGoal::Strength,
        days_per_week: 3,
        min_months: 0,
        weeks: 12,
        difficulty: 2,
    },
    MockEntry {
        id: "stronglifts_5x5",
        plan_type: "strength",
        name: "StrongLifts 5x5",
        name_de: "StrongLifts 5x5",
        description: "Alternating full-body sessions of five sets of five.",
        description_de: "Abwechselnde Ganzkörpereinheiten mit fünf Sätzen zu fünf Wiederholungen.",
        fitness_level: FitnessLevel::Beginner,
        primary_goal: TrainingGoal::Strength,
        days_per_week: 3,
        min_months: 0,
        weeks: 12,
        difficulty: 2,
    },
    MockEntry {
        id: "full_body_basics",
        plan_type: "general",
        name: "Full Body Basics",
        name_de: "Ganzkörper-Grundlagen",
        description: "Two short full-body sessions for general conditioning.",
        description_de: "Zwei kurze Ganzkörpereinheiten für die allgemeine Fitness.",
        fitness_level: FitnessLevel::Beginner,
        primary_goal: TrainingGoal::GeneralFitness,
        days_per_week: 2,
        min_months: 0,
        weeks: 8,
        difficulty: 1,
    },
    MockEntry {
        id: "phul",
        plan_type: "powerbuilding",
        name: "PHUL",
        name_de: "PHUL",
        description: "Power and hypertrophy upper/lower split.",
        description_de: "Oberkörper/Unterkörper-Split für Kraft und Muskelaufbau.",
        fitness_level: FitnessLevel::Intermediate,
        primary_goal: TrainingGoal::Both,
        days_per_week: 4,
        min_months: 6,
        weeks: 12,
        difficulty: 3,
    },
    MockEntry {
        id: "upper_lower_hypertrophy",
        plan_type: "hypertrophy",
        name: "Upper/Lower Hypertrophy",
        name_de: "Oberkörper/Unterkörper Hypertrophie",
        description: "Moderate loads and higher volume across four sessions.",
        description_de: "Moderate Lasten und höheres Volumen über vier Einheiten.",
        fitness_level: FitnessLevel::Intermediate,
        primary_goal: TrainingGoal::Hypertrophy,
        days_per_week: 4,
        min_months: 6,
        weeks: 10,
        difficulty: 3,
    },
    MockEntry {
        id: "push_pull_legs",
        plan_type: "hypertrophy",
        name: "Push Pull Legs",
        name_de: "Drücken Ziehen Beine",
        description: "Six-day split hitting each muscle group twice a week.",
        description_de: "Sechstägiger Split, der jede Muskelgruppe zweimal pro Woche trainiert.",
        fitness_level: FitnessLevel::Intermediate,
        primary_goal: TrainingGoal::Hypertrophy,
        days_per_week: 6,
        min_months: 12,
        weeks: 8,
        difficulty: 4,
    },
    MockEntry {
        id: "texas_method",
        plan_type: "strength",
        name: "Texas Method",
        name_de: "Texas-Methode",
        description: "Weekly volume, recovery and intensity days.",
        description_de: "Wöchentlicher Wechsel aus Volumen-, Erholungs- und Intensitätstag.",
        fitness_level: FitnessLevel::Intermediate,
        primary_goal: TrainingGoal::Strength,
        days_per_week: 3,
        min_months: 12,
        weeks: 12,
        difficulty: 4,
    },
    MockEntry {
        id: "wendler_531_advanced",
        plan_type: "strength",
        name: "5/3/1 Advanced",
        name_de: "5/3/1 Fortgeschritten",
        description: "Monthly waves with training maxes and joker sets.",
        description_de: "Monatliche Wellen mit Trainingsmaxima und Joker-Sätzen.",
        fitness_level: FitnessLevel::Advanced,
        primary_goal: TrainingGoal::Strength,
        days_per_week: 4,
        min_months: 36,
        weeks: 16,
        difficulty: 5,
    },
];

/// The eight-template mock catalog used across scenarios.
///
/// Index [`STARTING_STRENGTH`] is the beginner strength plan and index
/// [`WENDLER_ADVANCED`] the advanced one gated at 36 months.
#[must_use]
pub fn mock_templates() -> Vec<PlanTemplate> {
    MOCK_CATALOG
        .iter()
        .map(|entry| PlanTemplate {
            id: entry.id.to_owned(),
            plan_type: entry.plan_type.to_owned(),
            name: entry.name.to_owned(),
            name_de: entry.name_de.to_owned(),
            description: entry.description.to_owned(),
            description_de: entry.description_de.to_owned(),
            fitness_level: entry.fitness_level,
            primary_goal: entry.primary_goal,
            days_per_week: entry.days_per_week,
            min_training_experience_months: entry.min_months,
            estimated_duration_weeks: entry.weeks,
            difficulty_rating: entry.difficulty,
            created_at: Some("2024-01-15T10:00:00Z".to_owned()),
            updated_at: Some("2024-01-15T10:00:00Z".to_owned()),
        })
        .collect()
}

/// Profile from the exact-match scenario: beginner, two months of
/// experience, three days a week, training for strength.
#[must_use]
pub const fn beginner_strength_profile() -> UserProfile {
    UserProfile {
        fitness_level: FitnessLevel::Beginner,
        training_experience_months: 2,
        available_training_days: 3,
        primary_goal: TrainingGoal::Strength,
    }
}

/// Test `Scorer` giving every template the same eligible total.
///
/// Useful for exercising tie-breaking in recommenders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantScorer(pub f32);

impl Scorer for ConstantScorer {
    fn score(&self, _template: &PlanTemplate, _profile: &UserProfile) -> TemplateScore {
        let total = Self::sanitise(self.0);
        TemplateScore {
            total_score: total,
            dimensions: DimensionScores {
                fitness_level: total,
                goal: total,
                schedule: total,
                eligibility: total,
            },
            eligibility: Eligibility::Eligible,
            volume_note: None,
        }
    }
}
