//! `RankingRecommender` implementation over any [`Scorer`].

use std::cmp::Ordering;
use std::collections::HashSet;

use planmatch_core::{
    MAX_SCORE, MIN_SCORE, PlanRecommendation, PlanTemplate, RecommendError, Recommender, Scorer,
    UserProfile,
};
use planmatch_scorer::WeightedScorer;

use crate::RankerConfigError;

/// Configuration for [`RankingRecommender`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankerConfig {
    /// Omit templates whose total is at or below this score.
    ///
    /// `None` keeps every template the scorer does not exclude.
    pub exclusion_floor: Option<f32>,
}

impl RankerConfig {
    /// Validate the configuration and return a copy.
    ///
    /// A floor at or above the maximum score, or a NaN floor, would drop
    /// every template.
    ///
    /// # Errors
    /// Returns [`RankerConfigError::InvalidExclusionFloor`] when the floor is
    /// not finite or lies outside `0.0..100.0`.
    pub fn validate(self) -> Result<Self, RankerConfigError> {
        match self.exclusion_floor {
            Some(value) if !(value.is_finite() && (MIN_SCORE..MAX_SCORE).contains(&value)) => {
                Err(RankerConfigError::InvalidExclusionFloor { value })
            }
            _ => Ok(self),
        }
    }
}

/// Recommender that scores every template and keeps the best `limit`.
///
/// The recommender is generic over the scoring boundary so alternative
/// scorers can be ranked with the same ordering rules.
#[derive(Debug, Clone)]
pub struct RankingRecommender<S>
where
    S: Scorer,
{
    scorer: S,
    config: RankerConfig,
}

impl Default for RankingRecommender<WeightedScorer> {
    fn default() -> Self {
        Self::new(WeightedScorer::new())
    }
}

impl<S> RankingRecommender<S>
where
    S: Scorer,
{
    /// Construct a recommender using default configuration.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            config: RankerConfig::default(),
        }
    }

    /// Construct a recommender with explicit configuration.
    ///
    /// # Errors
    /// Returns [`RankerConfigError`] when the configuration is invalid.
    pub fn with_config(scorer: S, config: RankerConfig) -> Result<Self, RankerConfigError> {
        let validated = config.validate()?;
        Ok(Self {
            scorer,
            config: validated,
        })
    }

    /// The scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The ranking configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }

    fn is_kept(&self, recommendation: &PlanRecommendation) -> bool {
        if recommendation.score.eligibility.is_excluded() {
            return false;
        }
        self.config
            .exclusion_floor
            .is_none_or(|floor| recommendation.total_score() > floor)
    }

    fn rank(&self, profile: &UserProfile, templates: &[PlanTemplate]) -> Vec<PlanRecommendation> {
        let scored = templates.iter().map(|template| PlanRecommendation {
            template: template.clone(),
            score: self.scorer.score(template, profile),
        });
        let mut kept: Vec<PlanRecommendation> =
            scored.filter(|candidate| self.is_kept(candidate)).collect();
        kept.sort_unstable_by(ranking_order);
        log::debug!(
            "scored {} templates, {} excluded",
            templates.len(),
            templates.len().saturating_sub(kept.len())
        );
        kept
    }
}

impl<S> Recommender for RankingRecommender<S>
where
    S: Scorer,
{
    fn recommend(
        &self,
        profile: &UserProfile,
        templates: &[PlanTemplate],
        limit: usize,
    ) -> Result<Vec<PlanRecommendation>, RecommendError> {
        if limit == 0 {
            return Err(RecommendError::InvalidLimit { limit });
        }
        profile.validate()?;
        validate_catalog(templates)?;

        let mut ranked = self.rank(profile, templates);
        ranked.truncate(limit);
        log::debug!("returning {} recommendations (limit {limit})", ranked.len());
        Ok(ranked)
    }
}

fn validate_catalog(templates: &[PlanTemplate]) -> Result<(), RecommendError> {
    for template in templates {
        template
            .validate()
            .map_err(|source| RecommendError::InvalidTemplate {
                id: template.id.clone(),
                source,
            })?;
    }
    let mut seen = HashSet::with_capacity(templates.len());
    for template in templates {
        if !seen.insert(template.id.as_str()) {
            return Err(RecommendError::DuplicateTemplateId {
                id: template.id.clone(),
            });
        }
    }
    Ok(())
}

/// Descending total, then easier templates first, then identifier.
fn ranking_order(lhs: &PlanRecommendation, rhs: &PlanRecommendation) -> Ordering {
    rhs.total_score()
        .total_cmp(&lhs.total_score())
        .then_with(|| {
            lhs.template
                .difficulty_rating
                .cmp(&rhs.template.difficulty_rating)
        })
        .then_with(|| lhs.template.id.cmp(&rhs.template.id))
}
