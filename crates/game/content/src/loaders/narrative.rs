//! Narrative content loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bundle::ZoneNarrative;
use crate::loaders::{LoadResult, read_file};

/// On-disk shape of the narrative set: prologues and prompts per zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeData {
    pub zones: BTreeMap<String, ZoneNarrative>,
}

/// Loader for narrative content from RON files.
pub struct NarrativeLoader;

impl NarrativeLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, ZoneNarrative>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, ZoneNarrative>> {
        let data: NarrativeData =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("bad narrative RON: {e}"))?;
        for (zone, narrative) in &data.zones {
            for prompt in &narrative.prompts {
                if prompt.options.len() != prompt.outcomes.len() {
                    anyhow::bail!(
                        "zone {zone}: prompt {:?} has {} options but {} outcomes",
                        prompt.prompt,
                        prompt.options.len(),
                        prompt.outcomes.len()
                    );
                }
            }
        }
        Ok(data.zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_and_outcomes_must_pair_up() {
        let bad = r#"(
            zones: {
                "Z": (
                    prologues: [],
                    prompts: [
                        ( prompt: "?", options: ["a", "b"], outcomes: ["(+5 exp)"] ),
                    ],
                ),
            },
        )"#;
        assert!(NarrativeLoader::parse(bad).is_err());
    }

    #[test]
    fn time_filters_parse() {
        let good = r#"(
            zones: {
                "Z": (
                    prologues: ["dawn"],
                    prompts: [
                        (
                            prompt: "?",
                            options: ["a"],
                            outcomes: ["(+5 exp)"],
                            time_of_day: Some(Evening),
                        ),
                    ],
                ),
            },
        )"#;
        let zones = NarrativeLoader::parse(good).unwrap();
        assert_eq!(
            zones["Z"].prompts[0].time_of_day,
            Some(game_core::TimeOfDay::Evening)
        );
    }
}
