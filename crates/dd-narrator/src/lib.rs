//! Narrator for Disaster Drill briefings.
//!
//! Turns generated records into word-wrapped prose: one paragraph for the
//! scenario, one per person, and a bulleted list of resources.

pub mod config;
pub mod prose;
pub mod templates;

pub use config::NarratorConfig;
pub use prose::{age_article, indefinite_article, join_list, wrap_hanging, wrap_text};
pub use templates::Narrator;
