//! Paragraph scoring.
//!
//! The scoring service is an external collaborator: text goes in, a
//! bullshit index comes out. Everything else in the crate only talks to
//! the [`Scorer`] trait.
//!
//! # Providers
//!
//! - **BlaBlaMeter** - the public website, one endpoint per language
//!   (override with `BLABLAMETER_URL`)
//! - **Mock** - fixed or scripted scores, no network
//!
//! # Example
//!
//! ```no_run
//! use blablatex::{BlablameterScorer, Language, Scorer};
//!
//! let scorer = BlablameterScorer::new().unwrap();
//! let index = scorer.score("We leverage synergies.", Language::En).unwrap();
//! println!("BS index: {:.2}", index);
//! ```

mod blablameter;
mod mock;
mod provider;

pub use blablameter::{parse_index, BlablameterScorer, ENDPOINT_ENV};
pub use mock::MockScorer;
pub use provider::{Language, Scorer, ScorerConfig};
