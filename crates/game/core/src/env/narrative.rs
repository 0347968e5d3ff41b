//! Narrative content oracle: prologues and prompt pools per zone.

use crate::clock::TimeOfDay;

/// One narrative prompt with its options and their outcome strings.
///
/// `options[i]` resolves through `outcomes[i]`; loaders validate that the
/// two lists have equal length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativePrompt {
    pub prompt: String,
    pub options: Vec<String>,
    pub outcomes: Vec<String>,
    /// When set, the prompt is only eligible during that phase of the day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_of_day: Option<TimeOfDay>,
}

/// Read-only access to narrative content.
pub trait NarrativeOracle: Send + Sync {
    /// Scene-setting lines shown when an event marker is activated.
    fn prologues(&self, zone: &str) -> &[String];

    /// Full prompt pool for a zone, unfiltered.
    fn prompts(&self, zone: &str) -> &[NarrativePrompt];

    /// Prompts eligible right now: prompts whose time filter is absent or
    /// matches the current phase of day. Falls back to the whole pool when
    /// the filter would leave nothing to show.
    fn eligible_prompts(&self, zone: &str, time: TimeOfDay) -> Vec<&NarrativePrompt> {
        let pool = self.prompts(zone);
        let filtered: Vec<_> = pool
            .iter()
            .filter(|p| p.time_of_day.is_none_or(|t| t == time))
            .collect();
        if filtered.is_empty() {
            pool.iter().collect()
        } else {
            filtered
        }
    }
}
