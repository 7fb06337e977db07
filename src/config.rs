// src/config.rs
use std::collections::BTreeMap;

pub const DEFAULT_NAME: &str = "World";
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const GREETING_TEMPLATES: [&str; 4] = [
    "Hello, {name}! Welcome to the world of GenAI-Logic!",
    "Greetings, {name}! Let's explore AI-powered logic together!",
    "Hi there, {name}! Ready for some intelligent decision making?",
    "Welcome, {name}! Time to blend AI creativity with logical thinking!",
];

const TIME_RULES: [(&str, &str); 3] = [
    ("morning", "Good morning! Perfect time for fresh AI insights."),
    ("afternoon", "Good afternoon! Let's process some logical decisions."),
    ("evening", "Good evening! Time to reflect on AI-driven solutions."),
];

const MOOD_RULES: [(&str, &str); 3] = [
    ("excited", "Your excitement fuels great AI creativity!"),
    ("curious", "Curiosity drives the best logical explorations!"),
    ("focused", "Focus enhances both AI generation and logical reasoning!"),
];

const TIME_FALLBACK: &str = "Hello at any time of day!";
const MOOD_DEFAULT: &str = "Every mood brings unique perspectives to AI-Logic!";
const NO_CONTEXT: &str = "Logic processing complete - ready for action!";

#[derive(Debug, Clone)]
pub struct Config {
    pub greeting_templates: Vec<String>,
    pub logic_rules: LogicRules,
}

/// Sentence tables consulted by the context responder.
///
/// Keys are lowercase; lookups lowercase the incoming value first.
#[derive(Debug, Clone)]
pub struct LogicRules {
    pub time_based: BTreeMap<String, String>,
    /// Used when a `time` field is present but not in `time_based`.
    pub time_fallback: String,
    pub mood_based: BTreeMap<String, String>,
    /// Used when a `mood` field is present but not in `mood_based`.
    pub mood_default: String,
    /// Used when neither `time` nor `mood` is present.
    pub no_context: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            greeting_templates: GREETING_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            logic_rules: LogicRules::default(),
        }
    }
}

impl Default for LogicRules {
    fn default() -> Self {
        LogicRules {
            time_based: to_table(&TIME_RULES),
            time_fallback: TIME_FALLBACK.to_string(),
            mood_based: to_table(&MOOD_RULES),
            mood_default: MOOD_DEFAULT.to_string(),
            no_context: NO_CONTEXT.to_string(),
        }
    }
}

fn to_table(rules: &[(&str, &str)]) -> BTreeMap<String, String> {
    rules
        .iter()
        .map(|(key, sentence)| (key.to_string(), sentence.to_string()))
        .collect()
}
