use std::io::Write;

use crate::config::DEFAULT_NAME;
use crate::context::{Context, Mood, TimeOfDay};
use crate::error::Result;
use crate::hello::GenAiLogic;

/// Run the five fixed demonstration scenarios, writing them to `out`.
pub fn demonstrate<W: Write>(logic: &GenAiLogic, out: &mut W) -> Result<()> {
    writeln!(out, "=== GenAI-Logic Hello World Demonstration ===\n")?;

    writeln!(out, "1. Basic Hello World:")?;
    let result = logic.hello_world(DEFAULT_NAME, &Context::new());
    writeln!(out, "   {}\n", result.combined_message)?;

    writeln!(out, "2. Personalized Greeting:")?;
    let result = logic.hello_world("Alice", &Context::new());
    writeln!(out, "   {}\n", result.combined_message)?;

    writeln!(out, "3. Time-based Logic:")?;
    let result = logic.hello_world("Bob", &Context::new().with_time(TimeOfDay::Morning));
    writeln!(out, "   AI: {}", result.ai_greeting)?;
    writeln!(out, "   Logic: {}\n", result.logical_response)?;

    writeln!(out, "4. Mood-based Logic:")?;
    let result = logic.hello_world("Charlie", &Context::new().with_mood(Mood::Excited));
    writeln!(out, "   AI: {}", result.ai_greeting)?;
    writeln!(out, "   Logic: {}\n", result.logical_response)?;

    writeln!(out, "5. Complex Context:")?;
    let context = Context::new()
        .with_time(TimeOfDay::Evening)
        .with_mood(Mood::Curious);
    let result = logic.hello_world("Diana", &context);
    writeln!(out, "   Combined: {}", result.combined_message)?;

    Ok(())
}
