//! Outcome directive parser.
//!
//! Narrative outcomes embed machine-readable directives in their prose:
//!
//! ```text
//! (-25 health)[type=fire] (+10 exp) (+Loot) You stumble out of the blaze.
//! ```
//!
//! Parsing is split from application so malformed text is handled in one
//! place and the resolver only ever sees typed tokens. Text that matches no
//! directive is narration and is ignored here.

use std::sync::LazyLock;

use regex_lite::Regex;

/// One parsed directive, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeToken {
    /// A signed stat adjustment, optionally tagged with a damage type.
    Stat {
        stat: String,
        delta: i64,
        damage_type: Option<String>,
    },
    /// Draw one random item from the current zone's loot table.
    Loot,
    /// End the narrative flow by travelling to the named zone.
    Travel { destination: String },
}

static STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([-+]\d+)\s*(\w+)\s*\)(?:\s*\[type=(\w+)\])?")
        .unwrap_or_else(|e| unreachable!("stat directive pattern is valid: {e}"))
});

static TRAVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*travel to ([^)]+)\)")
        .unwrap_or_else(|e| unreachable!("travel directive pattern is valid: {e}"))
});

const LOOT_MARKER: &str = "(+Loot)";

/// Parse every directive out of an outcome string.
///
/// Stat tokens appear in text order; the loot token, if present, follows
/// them; a travel token always comes last since travel terminates the flow.
pub fn parse_outcome(text: &str) -> Vec<OutcomeToken> {
    let mut tokens = Vec::new();

    for caps in STAT_RE.captures_iter(text) {
        let (Some(value), Some(stat)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(delta) = value.as_str().parse::<i64>() else {
            tracing::warn!(directive = value.as_str(), "unparseable stat delta");
            continue;
        };
        tokens.push(OutcomeToken::Stat {
            stat: stat.as_str().to_ascii_lowercase(),
            delta,
            damage_type: caps.get(3).map(|m| m.as_str().to_ascii_lowercase()),
        });
    }

    if text.contains(LOOT_MARKER) {
        tokens.push(OutcomeToken::Loot);
    }

    if let Some(caps) = TRAVEL_RE.captures(text)
        && let Some(dest) = caps.get(1)
    {
        tokens.push(OutcomeToken::Travel {
            destination: dest.as_str().trim().to_string(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_stats_in_text_order() {
        let tokens = parse_outcome("(-20 hunger)(+10 exp) The stranger nods.");
        assert_eq!(
            tokens,
            vec![
                OutcomeToken::Stat {
                    stat: "hunger".to_string(),
                    delta: -20,
                    damage_type: None,
                },
                OutcomeToken::Stat {
                    stat: "exp".to_string(),
                    delta: 10,
                    damage_type: None,
                },
            ]
        );
    }

    #[test]
    fn damage_type_tag_attaches_to_its_directive() {
        let tokens = parse_outcome("(-25 health)[type=fire] You escape the blaze.");
        assert_eq!(
            tokens,
            vec![OutcomeToken::Stat {
                stat: "health".to_string(),
                delta: -25,
                damage_type: Some("fire".to_string()),
            }]
        );
    }

    #[test]
    fn whitespace_inside_directives_is_tolerated() {
        let tokens = parse_outcome("( -5  stamina ) [type=frost]");
        assert_eq!(
            tokens,
            vec![OutcomeToken::Stat {
                stat: "stamina".to_string(),
                delta: -5,
                damage_type: Some("frost".to_string()),
            }]
        );
    }

    #[test]
    fn loot_marker_and_travel_are_recognized() {
        let tokens = parse_outcome("(+Loot) You found a cache. (Travel to Shady Grove)");
        assert_eq!(
            tokens,
            vec![
                OutcomeToken::Loot,
                OutcomeToken::Travel {
                    destination: "Shady Grove".to_string(),
                },
            ]
        );
    }

    #[test]
    fn travel_matches_case_insensitively() {
        let tokens = parse_outcome("(travel to ARID DESERT)");
        assert_eq!(
            tokens,
            vec![OutcomeToken::Travel {
                destination: "ARID DESERT".to_string(),
            }]
        );
    }

    #[test]
    fn narration_without_directives_yields_nothing() {
        assert!(parse_outcome("You watch the clouds drift by.").is_empty());
        // A sign without a number is prose, not a directive.
        assert!(parse_outcome("(+ health)").is_empty());
    }
}
