//! Personnel generation: the roster of people available to the player.

use std::fmt;

use crate::config::{OTHER_SKILL_COUNT, Settings};
use crate::error::{DrillError, DrillResult};
use crate::sampler::Sampler;
use crate::tables::{FEMALE_FIRST_NAMES, JOB_AREAS, JOB_TYPES, MALE_FIRST_NAMES, SURNAMES};

/// Adult age range.
pub const ADULT_AGE_RANGE: (i64, i64) = (18, 65);

/// Likelihood (percent) of First Aid training.
pub const FIRST_AID_LIKELIHOOD: f64 = 30.0;

/// Likelihood (percent) of CPR training.
pub const CPR_LIKELIHOOD: f64 = 30.0;

/// Likelihood (percent) of search and rescue training.
pub const SAR_LIKELIHOOD: f64 = 10.0;

/// Gender of a generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Both genders, in draw order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// First names consistent with this gender.
    pub fn first_names(self) -> &'static [&'static str] {
        match self {
            Self::Male => MALE_FIRST_NAMES,
            Self::Female => FEMALE_FIRST_NAMES,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A member of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Full name, consistent with `gender`.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Gender.
    pub gender: Gender,
    /// Job description, e.g. "Marketing Technician".
    pub occupation: String,
    /// Has First Aid training.
    pub first_aid_trained: bool,
    /// Has CPR training.
    pub cpr_trained: bool,
    /// Has search and rescue training.
    pub sar_trained: bool,
    /// Distinct skills drawn from the configured skill pool.
    pub other_skills: Vec<String>,
}

/// Generate a roster whose size lies within the configured bounds.
pub fn generate_roster<S: Sampler>(settings: &Settings, sampler: &mut S) -> DrillResult<Vec<Person>> {
    let numbers = settings.personnel.numbers;
    if numbers.min < 1 || numbers.min > numbers.max {
        return Err(DrillError::InvalidConfiguration(format!(
            "personnel.numbers must satisfy 1 <= min <= max (got {}..{})",
            numbers.min, numbers.max
        )));
    }

    let count = sampler.uniform_int(i64::from(numbers.min), i64::from(numbers.max))? as usize;
    let roster = (0..count)
        .map(|_| generate_person(settings, sampler))
        .collect::<DrillResult<Vec<_>>>()?;

    tracing::debug!(count = roster.len(), "generated roster");
    Ok(roster)
}

/// Generate a single person.
pub fn generate_person<S: Sampler>(settings: &Settings, sampler: &mut S) -> DrillResult<Person> {
    let gender = *sampler.pick_one(&Gender::ALL)?;
    let first = sampler.pick_one(gender.first_names())?;
    let last = sampler.pick_one(SURNAMES)?;
    let area = sampler.pick_one(JOB_AREAS)?;
    let role = sampler.pick_one(JOB_TYPES)?;
    let (min_age, max_age) = ADULT_AGE_RANGE;
    let age = sampler.uniform_int(min_age, max_age)? as u32;

    let first_aid_trained = sampler.weighted_bool(FIRST_AID_LIKELIHOOD);
    let cpr_trained = sampler.weighted_bool(CPR_LIKELIHOOD);
    let sar_trained = sampler.weighted_bool(SAR_LIKELIHOOD);

    let other_skills = sampler
        .pick_set(&settings.personnel.skills, OTHER_SKILL_COUNT)?
        .into_iter()
        .cloned()
        .collect();

    Ok(Person {
        name: format!("{first} {last}"),
        age,
        gender,
        occupation: format!("{area} {role}"),
        first_aid_trained,
        cpr_trained,
        sar_trained,
        other_skills,
    })
}
