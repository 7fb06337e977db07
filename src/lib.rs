//! GenAI-Logic Hello World
//!
//! Combines a randomly chosen greeting template with a canned sentence
//! selected from time-of-day and mood rules.

pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod greeting;
pub mod hello;
pub mod logic;
pub mod output;

pub use context::{Context, Mood, TimeOfDay};
pub use error::{Error, Result};
pub use greeting::GreetingGenerator;
pub use hello::{GenAiLogic, HelloResult};
pub use logic::ContextResponder;
pub use output::OutputFormat;
