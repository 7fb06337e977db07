// src/cli.rs
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use genai_logic_hello::demo::demonstrate;
use genai_logic_hello::output::render;
use genai_logic_hello::{Context, GenAiLogic, Mood, OutputFormat, TimeOfDay};

const EXAMPLES: &str = "\
Examples:
  genai-logic-hello                             # Basic hello world
  genai-logic-hello --name Alice                # Personalized greeting
  genai-logic-hello --name Bob --time morning   # With time context
  genai-logic-hello --name Charlie --mood excited  # With mood context
  genai-logic-hello --demo                      # Full demonstration";

#[derive(Parser, Debug)]
#[command(name = "genai-logic-hello")]
#[command(about = "GenAI-Logic Hello World CLI", version)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Name for personalized greeting
    #[arg(long, default_value = "World")]
    pub name: String,

    /// Time of day for context-aware logic
    #[arg(long, value_enum)]
    pub time: Option<TimeOfDay>,

    /// Mood for context-aware logic
    #[arg(long, value_enum)]
    pub mood: Option<Mood>,

    /// Run full demonstration
    #[arg(long)]
    pub demo: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Simple)]
    pub format: OutputFormat,

    /// Log rule selection to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        if let Some(time) = self.time {
            context = context.with_time(time);
        }
        if let Some(mood) = self.mood {
            context = context.with_mood(mood);
        }
        context
    }
}

pub fn handle(args: &Args) -> Result<()> {
    let logic = GenAiLogic::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.demo {
        info!("running demonstration");
        demonstrate(&logic, &mut out)?;
        return Ok(());
    }

    let result = logic.hello_world(&args.name, &args.context());
    writeln!(out, "{}", render(&result, args.format)?)?;
    Ok(())
}
