//! Ranking of training plan templates for a user profile.
//!
//! This crate provides [`RankingRecommender`], the default implementation of
//! the [`Recommender`](planmatch_core::Recommender) trait. It validates the
//! request, scores every template with a pluggable
//! [`Scorer`](planmatch_core::Scorer), drops templates the scorer excludes or
//! that fall at or below the optional exclusion floor, and sorts the rest:
//! highest total first, then the easier template, then the smaller id.
//!
//! # Examples
//!
//! ```
//! use planmatch_core::Recommender;
//! use planmatch_core::test_support::{beginner_strength_profile, mock_templates};
//! use planmatch_ranker::RankingRecommender;
//! use planmatch_scorer::WeightedScorer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recommender = RankingRecommender::new(WeightedScorer::new());
//! let top = recommender.recommend(&beginner_strength_profile(), &mock_templates(), 5)?;
//! assert_eq!(top.first().map(|r| r.template.id.as_str()), Some("starting_strength"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod ranker;

pub use error::RankerConfigError;
pub use ranker::{RankerConfig, RankingRecommender};
