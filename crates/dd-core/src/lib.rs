//! Core of the Disaster Drill scenario generator.
//!
//! Loads [`Settings`], draws randomness through the [`Sampler`] trait, and
//! generates the three records of a drill: a [`Scenario`], a roster of
//! [`Person`]s, and a [`ResourceSet`], bundled as a [`Briefing`].

pub mod briefing;
pub mod config;
pub mod error;
pub mod personnel;
pub mod resources;
pub mod sampler;
pub mod scenario;
pub mod tables;

pub use briefing::Briefing;
pub use config::{Bounds, Settings};
pub use error::{DrillError, DrillResult};
pub use personnel::{Gender, Person, generate_person, generate_roster};
pub use resources::{ResourceItem, ResourceSet, generate_resources};
pub use sampler::{Sampler, StdSampler};
pub use scenario::{Scenario, generate_scenario};
