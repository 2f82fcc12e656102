//! Prose templates for each generated record.

use dd_core::{Briefing, Gender, Person, ResourceSet, Scenario};

use crate::config::NarratorConfig;
use crate::prose::{age_article, indefinite_article, join_list, wrap_hanging, wrap_text};

/// Renders records as wrapped paragraphs and bullet lists.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given layout.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// Describe the scenario in one paragraph.
    ///
    /// `headcount` is the number of other people with the player.
    pub fn render_scenario(&self, scenario: &Scenario, headcount: usize) -> String {
        let article = indefinite_article(&scenario.kind);
        let others = if headcount == 1 { "other" } else { "others" };
        let called = if scenario.emergency_called {
            "has"
        } else {
            "hasn't"
        };
        let text = format!(
            "At approximately {time} hours ({ago} minutes ago) {article} {kind} occurred. \
             You and {headcount} {others} are located at {location}, an estimated \
             {distance:.2} mi from the disaster site. 911 {called} been called.",
            time = scenario.occurred_time,
            ago = scenario.occurred_minutes_ago,
            kind = scenario.kind,
            location = scenario.subject_location,
            distance = scenario.subject_distance,
        );
        self.paragraph(&text)
    }

    /// Describe one person in one paragraph.
    pub fn render_person(&self, person: &Person) -> String {
        let (subject, possessive) = pronouns(person.gender);
        let text = format!(
            "{name} is {article} {age}-year-old {gender} {occupation}. \
             {subject} {first_aid} First Aid training. \
             {subject} {cpr} CPR training. \
             {subject} {sar} search and rescue training. \
             {possessive} other skills include {skills}.",
            name = person.name,
            article = age_article(person.age),
            age = person.age,
            gender = person.gender,
            occupation = person.occupation,
            first_aid = has(person.first_aid_trained),
            cpr = has(person.cpr_trained),
            sar = has(person.sar_trained),
            skills = join_list(&person.other_skills),
        );
        self.paragraph(&text)
    }

    /// List resources as bullets, followed by gas and cash.
    ///
    /// Bullets longer than the width wrap under their first word.
    pub fn render_resources(&self, resources: &ResourceSet) -> String {
        let entries = resources
            .items
            .iter()
            .map(ToString::to_string)
            .chain([
                format!("{gas:.1} gallons of gas", gas = resources.gas_gallons),
                format!("${cash:.2} in cash", cash = resources.cash_usd),
            ]);
        let lines: Vec<String> = entries.flat_map(|entry| self.bullet(&entry)).collect();
        lines.join("\n")
    }

    /// Render the whole briefing: scenario, personnel, then resources.
    ///
    /// Every section ends with a blank line.
    pub fn render_briefing(&self, briefing: &Briefing) -> String {
        let mut output = String::new();

        output.push_str("Scenario:\n");
        output.push_str(&self.render_scenario(&briefing.scenario, briefing.headcount()));
        output.push_str("\n\n");

        output.push_str("Personnel:\n");
        for person in &briefing.personnel {
            output.push_str(&self.render_person(person));
            output.push_str("\n\n");
        }

        output.push_str("Resources:\n");
        output.push_str(&self.render_resources(&briefing.resources));
        output.push_str("\n\n");

        output
    }

    fn bullet(&self, text: &str) -> Vec<String> {
        let indent = &self.config.indent;
        let first = format!("{indent}- ");
        let rest = " ".repeat(first.chars().count());
        wrap_hanging(text, self.config.width, &first, &rest)
    }

    fn paragraph(&self, text: &str) -> String {
        wrap_text(text, self.config.width, &self.config.indent).join("\n")
    }
}

fn pronouns(gender: Gender) -> (&'static str, &'static str) {
    match gender {
        Gender::Male => ("He", "His"),
        Gender::Female => ("She", "Her"),
    }
}

fn has(trained: bool) -> &'static str {
    if trained { "has" } else { "doesn't have" }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use dd_core::{ResourceItem, Settings, StdSampler};

    use super::*;

    fn scenario(kind: &str) -> Scenario {
        Scenario {
            kind: kind.to_string(),
            occurred_time: "0745".to_string(),
            occurred_minutes_ago: 12,
            subject_location: "4821 Maple St".to_string(),
            subject_distance: 1.5,
            emergency_called: false,
        }
    }

    fn person(gender: Gender) -> Person {
        Person {
            name: "Laura Nguyen".to_string(),
            age: 18,
            gender,
            occupation: "Marketing Technician".to_string(),
            first_aid_trained: true,
            cpr_trained: false,
            sar_trained: true,
            other_skills: vec![
                "welding".to_string(),
                "amateur radio".to_string(),
                "sailing".to_string(),
            ],
        }
    }

    /// Words of `text` with surrounding punctuation stripped.
    fn words(text: &str) -> HashSet<String> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| ",.()".contains(c)).to_string())
            .collect()
    }

    #[test]
    fn scenario_article_selection() {
        let narrator = Narrator::default();
        assert!(
            narrator
                .render_scenario(&scenario("earthquake"), 3)
                .contains("an earthquake")
        );
        assert!(
            narrator
                .render_scenario(&scenario("tsunami"), 3)
                .contains("a tsunami")
        );
    }

    #[test]
    fn scenario_paragraph_content() {
        let narrator = Narrator::new(NarratorConfig::new().with_width(1000));
        let text = narrator.render_scenario(&scenario("flood"), 4);
        assert_eq!(
            text,
            "    At approximately 0745 hours (12 minutes ago) a flood occurred. You and 4 \
             others are located at 4821 Maple St, an estimated 1.50 mi from the disaster \
             site. 911 hasn't been called."
        );
    }

    #[test]
    fn scenario_emergency_called_and_single_other() {
        let narrator = Narrator::new(NarratorConfig::new().with_width(1000));
        let mut s = scenario("flood");
        s.emergency_called = true;
        let text = narrator.render_scenario(&s, 1);
        assert!(text.contains("You and 1 other are"));
        assert!(text.contains("911 has been called."));
    }

    #[test]
    fn scenario_lines_fit_width() {
        let narrator = Narrator::default();
        let text = narrator.render_scenario(&scenario("active shooting event"), 7);
        assert!(text.lines().count() > 1);
        for line in text.lines() {
            assert!(line.len() <= 80);
            assert!(line.starts_with("    "));
        }
    }

    #[test]
    fn person_paragraph_content() {
        let narrator = Narrator::new(NarratorConfig::new().with_width(1000));
        let text = narrator.render_person(&person(Gender::Female));
        assert_eq!(
            text,
            "    Laura Nguyen is an 18-year-old female Marketing Technician. She has First \
             Aid training. She doesn't have CPR training. She has search and rescue \
             training. Her other skills include welding, amateur radio, and sailing."
        );
    }

    #[test]
    fn female_pronouns_never_mixed() {
        let narrator = Narrator::default();
        let text = narrator.render_person(&person(Gender::Female));
        let words = words(&text);
        assert!(words.contains("She"));
        assert!(words.contains("Her"));
        assert!(!words.contains("He"));
        assert!(!words.contains("His"));
    }

    #[test]
    fn male_pronouns_never_mixed() {
        let narrator = Narrator::default();
        let mut p = person(Gender::Male);
        p.name = "Mark Lee".to_string();
        let words = words(&narrator.render_person(&p));
        assert!(words.contains("He"));
        assert!(words.contains("His"));
        assert!(!words.contains("She"));
        assert!(!words.contains("Her"));
    }

    #[test]
    fn resources_listing() {
        let narrator = Narrator::default();
        let resources = ResourceSet {
            items: vec![
                ResourceItem {
                    quantity: 4,
                    name: "flashlights".to_string(),
                },
                ResourceItem {
                    quantity: 10,
                    name: "wool blankets".to_string(),
                },
            ],
            gas_gallons: 12.5,
            cash_usd: 123.4,
        };
        assert_eq!(
            narrator.render_resources(&resources),
            "    - 4 flashlights\n    - 10 wool blankets\n    - 12.5 gallons of gas\n    - $123.40 in cash"
        );
    }

    #[test]
    fn long_resource_names_wrap_within_width() {
        let narrator = Narrator::new(NarratorConfig::new().with_width(30));
        let resources = ResourceSet {
            items: vec![ResourceItem {
                quantity: 6,
                name: "rolls of extra wide reinforced duct tape".to_string(),
            }],
            gas_gallons: 8.0,
            cash_usd: 15.0,
        };
        let text = narrator.render_resources(&resources);
        assert_eq!(
            text,
            "    - 6 rolls of extra wide\n      reinforced duct tape\n    - 8.0 gallons of gas\n    - $15.00 in cash"
        );
        for line in text.lines() {
            assert!(line.chars().count() <= 30, "{line:?}");
        }
    }

    #[test]
    fn briefing_sections_in_order() {
        let settings = Settings::builtin().unwrap();
        let briefing = Briefing::generate(&settings, &mut StdSampler::seeded(42)).unwrap();
        let text = Narrator::default().render_briefing(&briefing);

        let scenario_at = text.find("Scenario:").unwrap();
        let personnel_at = text.find("Personnel:").unwrap();
        let resources_at = text.find("Resources:").unwrap();
        assert!(scenario_at < personnel_at && personnel_at < resources_at);
        assert_eq!(text.matches("-year-old").count(), briefing.headcount());
    }

    #[test]
    fn every_record_word_survives_wrapping() {
        let settings = Settings::builtin().unwrap();
        let narrator = Narrator::default();
        for seed in 0..25 {
            let briefing = Briefing::generate(&settings, &mut StdSampler::seeded(seed)).unwrap();

            let rendered = words(&narrator.render_scenario(&briefing.scenario, briefing.headcount()));
            let scenario = &briefing.scenario;
            for field in [&scenario.kind, &scenario.occurred_time, &scenario.subject_location] {
                for word in field.split_whitespace() {
                    assert!(rendered.contains(word), "missing {word:?}");
                }
            }

            for person in &briefing.personnel {
                let rendered = words(&narrator.render_person(person));
                let fields = [&person.name, &person.occupation]
                    .into_iter()
                    .chain(person.other_skills.iter());
                for field in fields {
                    for word in field.split_whitespace() {
                        assert!(rendered.contains(word), "missing {word:?}");
                    }
                }
            }

            let rendered = words(&narrator.render_resources(&briefing.resources));
            for item in &briefing.resources.items {
                for word in item.name.split_whitespace() {
                    assert!(rendered.contains(word), "missing {word:?}");
                }
            }
        }
    }
}
