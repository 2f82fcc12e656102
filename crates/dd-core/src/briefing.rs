//! The three records generated for one drill.

use crate::config::Settings;
use crate::error::DrillResult;
use crate::personnel::{Person, generate_roster};
use crate::resources::{ResourceSet, generate_resources};
use crate::sampler::Sampler;
use crate::scenario::{Scenario, generate_scenario};

/// A scenario, roster, and resource set generated together.
#[derive(Debug, Clone, PartialEq)]
pub struct Briefing {
    /// The disaster premise.
    pub scenario: Scenario,
    /// People available to the player, in display order.
    pub personnel: Vec<Person>,
    /// Supplies on hand.
    pub resources: ResourceSet,
}

impl Briefing {
    /// Generate scenario, personnel, and resources, in that order.
    pub fn generate<S: Sampler>(settings: &Settings, sampler: &mut S) -> DrillResult<Self> {
        let scenario = generate_scenario(settings, sampler)?;
        let personnel = generate_roster(settings, sampler)?;
        let resources = generate_resources(settings, sampler)?;
        Ok(Self {
            scenario,
            personnel,
            resources,
        })
    }

    /// Number of people on the roster.
    pub fn headcount(&self) -> usize {
        self.personnel.len()
    }
}
