use std::collections::BTreeMap;

use clap::ValueEnum;

pub const TIME_KEY: &str = "time";
pub const MOOD_KEY: &str = "mood";

/// Named string fields supplied with a request.
///
/// Only `time` and `mood` are consulted; any other field is carried but
/// ignored by the responder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    fields: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_time(self, time: TimeOfDay) -> Self {
        self.with(TIME_KEY, time.as_str())
    }

    pub fn with_mood(self, mood: Mood) -> Self {
        self.with(MOOD_KEY, mood.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Context {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mood {
    Excited,
    Curious,
    Focused,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excited => "excited",
            Mood::Curious => "curious",
            Mood::Focused => "focused",
        }
    }
}
