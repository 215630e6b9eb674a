use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Intent, IntentDistribution};

/// Weights before any trigger fires. They sum to 0.8, not 1.0: the remaining
/// mass is earned through triggers, and normalization absorbs the gap.
pub const BASE_WEIGHTS: IntentDistribution = IntentDistribution {
    informational: 0.2,
    navigational: 0.1,
    commercial: 0.2,
    transactional: 0.2,
    local: 0.1,
};

/// `(intent, bonus, whole-word terms)`, evaluated independently and additively.
const TRIGGER_TABLE: &[(Intent, f64, &[&str])] = &[
    (
        Intent::Informational,
        0.8,
        &["what", "how", "why", "guide", "tutorial", "meaning", "definition", "examples"],
    ),
    (Intent::Commercial, 0.6, &["best", "top", "vs", "compare", "review"]),
    (
        Intent::Transactional,
        0.8,
        &["buy", "price", "coupon", "deal", "order", "subscribe", "quote", "book"],
    ),
    (
        Intent::Local,
        0.9,
        &["near me", "nearby", "hours", "open now", "directions", "map"],
    ),
    (
        Intent::Navigational,
        0.8,
        &["login", "site:", "homepage", "official", "contact"],
    ),
];

struct Trigger {
    intent: Intent,
    bonus: f64,
    pattern: Regex,
}

static TRIGGERS: Lazy<Vec<Trigger>> = Lazy::new(|| {
    TRIGGER_TABLE
        .iter()
        .map(|&(intent, bonus, terms)| Trigger {
            intent,
            bonus,
            pattern: word_alternation(terms),
        })
        .collect()
});

/// `\b(?:t1|t2|...)\b` over escaped terms, with ASCII word boundaries.
fn word_alternation(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))
        .expect("trigger vocabulary is a valid pattern")
}

/// Scores `query` against the five intents and returns a normalized distribution.
///
/// Matching is case-insensitive and whole-word. Several triggers can fire on
/// one query; each adds its bonus once.
///
/// ```
/// use intent::classify;
///
/// let d = classify("best coffee near me");
/// assert!(d.local > d.commercial);
/// assert!((d.total() - 1.0).abs() < 1e-9);
/// ```
pub fn classify(query: &str) -> IntentDistribution {
    let lowered = query.to_lowercase();
    let mut scores = BASE_WEIGHTS;

    for trigger in TRIGGERS.iter() {
        if trigger.pattern.is_match(&lowered) {
            *scores.get_mut(trigger.intent) += trigger.bonus;
        }
    }

    scores.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_query_yields_normalized_base() {
        let d = classify("");
        assert!(approx(d.informational, 0.25));
        assert!(approx(d.navigational, 0.125));
        assert!(approx(d.commercial, 0.25));
        assert!(approx(d.transactional, 0.25));
        assert!(approx(d.local, 0.125));
    }

    #[test]
    fn generic_query_matches_empty_query() {
        assert_eq!(classify("knowledge graph"), classify(""));
    }

    #[test]
    fn informational_trigger() {
        let d = classify("What is SEO");
        // (0.2 + 0.8) / 1.6
        assert!(approx(d.informational, 0.625));
        assert!(approx(d.total(), 1.0));
    }

    #[test]
    fn multiple_triggers_stack() {
        let d = classify("how to buy the best laptop");
        // raw: inf 1.0, nav 0.1, com 0.8, tra 1.0, loc 0.1 -> total 3.0
        assert!(approx(d.informational, 1.0 / 3.0));
        assert!(approx(d.commercial, 0.8 / 3.0));
        assert!(approx(d.transactional, 1.0 / 3.0));
        assert!(approx(d.navigational, 0.1 / 3.0));
    }

    #[test]
    fn same_trigger_counts_once() {
        assert_eq!(classify("buy buy buy"), classify("buy"));
    }

    #[test]
    fn phrases_match_whole() {
        let d = classify("pizza near me");
        assert!(approx(d.local, 1.0 / 1.7));

        let d = classify("pizza open now");
        assert!(approx(d.local, 1.0 / 1.7));

        // "near" alone is not a trigger
        assert_eq!(classify("pizza near"), classify(""));
    }

    #[test]
    fn partial_words_do_not_fire() {
        // "showcase" contains "how", "bookkeeping" contains "book", "topic" contains "top"
        assert_eq!(classify("showcase bookkeeping topic"), classify(""));
    }

    #[test]
    fn site_operator_is_navigational() {
        let d = classify("site:example.com pricing");
        assert!(approx(d.navigational, 0.9 / 1.6));
    }

    #[test]
    fn case_and_spacing_do_not_change_result() {
        assert_eq!(classify("BUY Coupon"), classify("buy coupon"));
        assert_eq!(classify("  buy   coupon "), classify("buy coupon"));
    }

    #[test]
    fn all_categories_fire() {
        let d = classify("how to book the best hotel near me official");
        // raw: inf 1.0, nav 0.9, com 0.8, tra 1.0, loc 1.0 -> total 4.7
        assert!(approx(d.local, 1.0 / 4.7));
        assert!(approx(d.navigational, 0.9 / 4.7));
        assert!(approx(d.total(), 1.0));
    }

    #[test]
    fn non_ascii_letters_act_as_word_separators() {
        let base = classify("");
        assert!(classify("éwhat").informational > base.informational);
        assert_eq!(classify("éwhat"), classify("what"));
        assert_eq!(classify("ñbuy"), classify("buy"));
    }

    #[test]
    fn distributions_always_sum_to_one() {
        for q in ["", "x", "vs", "compare prices", "directions to map hours", "login contact"] {
            assert!(approx(classify(q).total(), 1.0), "query {q:?}");
        }
    }
}
