//! Word tables for names, street addresses, and occupations.
//!
//! These pools are fixed data rather than settings: they give each
//! generated person and location a plausible name without asking the
//! settings author to supply one.

/// Male first names.
pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas", "Charles",
    "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Andrew", "Paul", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Jason", "Edward", "Jeffrey",
    "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin",
    "Scott", "Brandon", "Benjamin", "Samuel",
];

/// Female first names.
pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna",
    "Brenda", "Pamela", "Emma", "Nicole", "Helen",
];

/// Surnames.
pub const SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

/// Street names used in generated addresses.
pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Walnut", "Spring", "North", "Ridge", "Church", "Willow", "Mill", "Sunset", "Railroad",
    "Jackson", "Cherry", "Highland", "Johnson", "Franklin", "Lincoln", "Madison", "Meadow",
    "River", "Forest", "Valley",
];

/// Abbreviated street suffixes.
pub const STREET_SUFFIXES: &[&str] = &[
    "St", "Ave", "Rd", "Blvd", "Dr", "Ln", "Ct", "Pl", "Way", "Ter", "Pkwy", "Cir",
];

/// The area half of an occupation ("Marketing" in "Marketing Technician").
pub const JOB_AREAS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Directives",
    "Implementation", "Integration", "Functionality", "Response", "Paradigm", "Tactics",
    "Identity", "Markets", "Group", "Division", "Applications", "Optimization", "Operations",
    "Infrastructure", "Intranet", "Communications", "Web", "Branding", "Quality", "Assurance",
    "Mobility", "Accounts", "Data", "Creative", "Configuration", "Accountability",
    "Interactions", "Factors", "Usability", "Metrics",
];

/// The role half of an occupation ("Technician" in "Marketing Technician").
pub const JOB_TYPES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Orchestrator", "Technician", "Developer", "Producer", "Consultant",
    "Assistant", "Facilitator", "Agent", "Representative", "Strategist",
];

/// Highest house number in a generated address.
pub const MAX_HOUSE_NUMBER: i64 = 9999;
