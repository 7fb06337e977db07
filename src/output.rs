use clap::ValueEnum;

use crate::error::Result;
use crate::hello::HelloResult;

/// How a single (non-demo) result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Combined message only
    #[default]
    Simple,
    /// One labeled line per field
    Detailed,
    /// Pretty-printed JSON object
    Json,
}

pub fn render(result: &HelloResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Simple => result.combined_message.clone(),
        OutputFormat::Detailed => format!(
            "AI Greeting: {}\nLogic Response: {}\nCombined: {}",
            result.ai_greeting, result.logical_response, result.combined_message
        ),
        OutputFormat::Json => escape_non_ascii(&serde_json::to_string_pretty(result)?),
    };
    Ok(rendered)
}

/// Rewrite every non-ASCII character as `\uXXXX` escapes (UTF-16 units).
///
/// Non-ASCII can only occur inside JSON string literals, so escaping the
/// whole document keeps it valid.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}
