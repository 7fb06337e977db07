//src/logic.rs
use tracing::debug;

use crate::config::LogicRules;
use crate::context::{Context, MOOD_KEY, TIME_KEY};

/// Selects a canned sentence from the request context.
///
/// Precedence: a `time` field always decides the answer, even when `mood`
/// is also present. A `mood` field is consulted only without `time`.
#[derive(Debug, Clone, Default)]
pub struct ContextResponder {
    rules: LogicRules,
}

impl ContextResponder {
    pub fn new(rules: LogicRules) -> Self {
        Self { rules }
    }

    pub fn respond(&self, context: &Context) -> &str {
        if let Some(time) = context.get(TIME_KEY) {
            let key = time.to_lowercase();
            debug!(time = %key, "applying time-based rule");
            return self
                .rules
                .time_based
                .get(&key)
                .unwrap_or(&self.rules.time_fallback);
        }

        if let Some(mood) = context.get(MOOD_KEY) {
            let key = mood.to_lowercase();
            debug!(mood = %key, "applying mood-based rule");
            return self
                .rules
                .mood_based
                .get(&key)
                .unwrap_or(&self.rules.mood_default);
        }

        debug!("no recognized context fields");
        &self.rules.no_context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Mood, TimeOfDay};

    fn respond(pairs: &[(&str, &str)]) -> String {
        let context: Context = pairs.iter().copied().collect();
        ContextResponder::default().respond(&context).to_string()
    }

    #[test]
    fn test_time_based() {
        assert!(respond(&[("time", "morning")]).to_lowercase().contains("morning"));
        assert!(respond(&[("time", "afternoon")]).to_lowercase().contains("afternoon"));
        assert_eq!(
            respond(&[("time", "evening")]),
            "Good evening! Time to reflect on AI-driven solutions."
        );
    }

    #[test]
    fn test_mood_based() {
        assert!(respond(&[("mood", "excited")]).to_lowercase().contains("excitement"));
        assert!(respond(&[("mood", "curious")]).to_lowercase().contains("curiosity"));
        assert_eq!(
            respond(&[("mood", "focused")]),
            "Focus enhances both AI generation and logical reasoning!"
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(respond(&[("time", "MORNING")]), respond(&[("time", "morning")]));
        assert_eq!(respond(&[("mood", "Curious")]), respond(&[("mood", "curious")]));
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        assert_eq!(respond(&[("time", "midnight")]), "Hello at any time of day!");
        assert_eq!(
            respond(&[("mood", "sleepy")]),
            "Every mood brings unique perspectives to AI-Logic!"
        );
    }

    #[test]
    fn test_unknown_or_empty_context() {
        let fallback = "Logic processing complete - ready for action!";
        assert_eq!(respond(&[("unknown", "value")]), fallback);
        assert_eq!(respond(&[]), fallback);
    }

    #[test]
    fn test_time_takes_precedence_over_mood() {
        let context = Context::new()
            .with_time(TimeOfDay::Evening)
            .with_mood(Mood::Focused);
        let responder = ContextResponder::default();
        let response = responder.respond(&context);
        assert!(response.to_lowercase().contains("evening"));

        // an unknown time still wins over a known mood
        assert_eq!(
            respond(&[("time", "noon"), ("mood", "excited")]),
            "Hello at any time of day!"
        );
    }
}
