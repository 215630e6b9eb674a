use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::types::{Entity, EntityKind};

pub const PERSON_CONFIDENCE: f64 = 0.85;
pub const PLACE_CONFIDENCE: f64 = 0.75;
pub const CONCEPT_CONFIDENCE: f64 = 0.7;

const PERSON_NAME: &str = "Eureka Amor";

/// Recognized places, first match wins.
pub const PLACES: &[&str] = &["argentina", "buenos aires", "cathedral city", "palm springs"];

/// Domain concepts; a space inside a term matches any run of whitespace.
pub const CONCEPTS: &[&str] = &[
    "seo",
    "sx o",
    "sxo",
    "quantum",
    "qubit",
    "encryption",
    "entity",
    "knowledge graph",
];

/// ASCII word boundary; letters outside ASCII count as separators.
const BOUNDARY: &str = r"(?-u:\b)";

/// Escapes `term` and folds only ASCII case; a space matches any whitespace run.
fn ascii_caseless(term: &str) -> String {
    term.split(' ')
        .map(|word| format!("(?i-u:{})", regex::escape(word)))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

static PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&ascii_caseless("eureka amor")).expect("person pattern is valid")
});

static PLACE: Lazy<Regex> = Lazy::new(|| {
    let alternation = PLACES
        .iter()
        .map(|p| ascii_caseless(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("{BOUNDARY}(?:{alternation}){BOUNDARY}"))
        .expect("place vocabulary is valid")
});

static CONCEPT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CONCEPTS
        .iter()
        .map(|&term| {
            let body = ascii_caseless(term);
            let pattern = Regex::new(&format!("{BOUNDARY}{body}{BOUNDARY}"))
                .expect("concept vocabulary is valid");
            (term, pattern)
        })
        .collect()
});

/// Pulls people, places and concepts out of `query`.
///
/// Order is person, place, then concepts in vocabulary order. Entities whose
/// lowercased name was already emitted are dropped, whatever their type.
///
/// ```
/// use intent::{extract_entities, EntityKind};
///
/// let entities = extract_entities("Eureka Amor loves Buenos Aires and SEO");
/// let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["Eureka Amor", "Buenos Aires", "SEO"]);
/// assert_eq!(entities[1].kind, EntityKind::Place);
/// ```
pub fn extract_entities(query: &str) -> Vec<Entity> {
    let q = query.trim();
    let mut entities = Vec::new();

    if PERSON.is_match(q) {
        entities.push(Entity::new(PERSON_NAME, EntityKind::Person, PERSON_CONFIDENCE));
    }

    if let Some(m) = PLACE.find(q) {
        entities.push(Entity::new(m.as_str(), EntityKind::Place, PLACE_CONFIDENCE));
    }

    for (term, pattern) in CONCEPT_PATTERNS.iter() {
        if pattern.is_match(q) {
            entities.push(Entity::new(
                term.to_uppercase(),
                EntityKind::Concept,
                CONCEPT_CONFIDENCE,
            ));
        }
    }

    dedupe_by_name(entities)
}

fn dedupe_by_name(entities: Vec<Entity>) -> Vec<Entity> {
    let mut seen = HashSet::new();
    entities
        .into_iter()
        .filter(|e| seen.insert(e.name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn person_place_and_concept_in_order() {
        let entities = extract_entities("Eureka Amor loves Buenos Aires and SEO");
        assert_eq!(
            entities,
            vec![
                Entity::new("Eureka Amor", EntityKind::Person, 0.85),
                Entity::new("Buenos Aires", EntityKind::Place, 0.75),
                Entity::new("SEO", EntityKind::Concept, 0.7),
            ]
        );
    }

    #[test]
    fn repeated_concept_yields_one_entity() {
        let entities = extract_entities("seo seo");
        assert_eq!(entities, vec![Entity::new("SEO", EntityKind::Concept, 0.7)]);
    }

    #[test]
    fn person_tolerates_any_whitespace() {
        let entities = extract_entities("about EUREKA \t  amor");
        assert_eq!(names(&entities), ["Eureka Amor"]);
        assert_eq!(entities[0].kind, EntityKind::Person);
    }

    #[test]
    fn place_keeps_matched_text() {
        let entities = extract_entities("  hotels in PALM springs ");
        assert_eq!(names(&entities), ["PALM springs"]);
    }

    #[test]
    fn only_first_place_is_emitted() {
        let entities = extract_entities("argentina vs cathedral city");
        assert_eq!(names(&entities), ["argentina"]);
    }

    #[test]
    fn earliest_place_in_text_wins_over_vocabulary_order() {
        let entities = extract_entities("from palm springs to argentina");
        assert_eq!(names(&entities), ["palm springs"]);
    }

    #[test]
    fn multi_word_concepts_allow_whitespace_runs() {
        let entities = extract_entities("Knowledge   Graph for sx  o");
        assert_eq!(names(&entities), ["SX O", "KNOWLEDGE GRAPH"]);
    }

    #[test]
    fn concepts_follow_vocabulary_order() {
        let entities = extract_entities("encryption for a quantum qubit entity with sxo");
        assert_eq!(
            names(&entities),
            ["SXO", "QUANTUM", "QUBIT", "ENCRYPTION", "ENTITY"]
        );
    }

    #[test]
    fn concepts_need_whole_words() {
        assert!(extract_entities("seoul entities quantumleap").is_empty());
    }

    #[test]
    fn case_folding_is_ascii_only() {
        assert!(extract_entities("ſeo").is_empty());
        assert!(extract_entities("Ｓeo").is_empty());
        assert_eq!(names(&extract_entities("SeO")), ["SEO"]);
    }

    #[test]
    fn non_ascii_letters_bound_words() {
        assert_eq!(names(&extract_entities("éseoé")), ["SEO"]);
        assert_eq!(names(&extract_entities("eureka\u{a0}amor")), ["Eureka Amor"]);
    }

    #[test]
    fn no_matches_yields_empty() {
        assert!(extract_entities("").is_empty());
        assert!(extract_entities("   ").is_empty());
        assert!(extract_entities("plain query").is_empty());
    }

    #[test]
    fn dedupe_keeps_first_even_across_types() {
        let deduped = dedupe_by_name(vec![
            Entity::new("Argentina", EntityKind::Place, 0.75),
            Entity::new("ARGENTINA", EntityKind::Concept, 0.7),
            Entity::new("SEO", EntityKind::Concept, 0.7),
        ]);
        assert_eq!(
            deduped,
            vec![
                Entity::new("Argentina", EntityKind::Place, 0.75),
                Entity::new("SEO", EntityKind::Concept, 0.7),
            ]
        );
    }
}
