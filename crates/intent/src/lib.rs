//! # Eureka Wave Intent (`intent`)
//!
//! Deterministic, rule-based query understanding. No models, no randomness:
//! the same query string always produces the same output.
//!
//! - [`classify`] scores a query against five intents (informational,
//!   navigational, commercial, transactional, local) using whole-word trigger
//!   vocabularies, then normalizes to a distribution.
//! - [`extract_entities`] finds a known person, at most one place, and any
//!   number of domain concepts, deduplicated by name.
//! - [`assign_cluster`] turns the distribution into a content-cluster label
//!   through a fixed priority chain.
//!
//! ```
//! use intent::{assign_cluster, classify, ClusterLabel};
//!
//! let intents = classify("buy quantum encryption course");
//! assert_eq!(assign_cluster(&intents), ClusterLabel::Conversion);
//! ```

mod classify;
mod cluster;
mod entities;
mod types;

pub use crate::classify::{classify, BASE_WEIGHTS};
pub use crate::cluster::{assign_cluster, CLUSTER_THRESHOLD};
pub use crate::entities::{
    extract_entities, CONCEPTS, CONCEPT_CONFIDENCE, PERSON_CONFIDENCE, PLACES, PLACE_CONFIDENCE,
};
pub use crate::types::{ClusterLabel, Entity, EntityKind, Intent, IntentDistribution};
