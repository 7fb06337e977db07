use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::context::Context;
use crate::error::Result;
use crate::greeting::GreetingGenerator;
use crate::logic::ContextResponder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResult {
    pub ai_greeting: String,
    pub logical_response: String,
    pub combined_message: String,
}

/// Greeting generator and context responder composed into one call.
#[derive(Debug, Clone, Default)]
pub struct GenAiLogic {
    greeter: GreetingGenerator,
    responder: ContextResponder,
}

impl GenAiLogic {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            greeter: GreetingGenerator::new(config.greeting_templates)?,
            responder: ContextResponder::new(config.logic_rules),
        })
    }

    pub fn generate_greeting(&self, name: &str) -> String {
        self.greeter.generate(name)
    }

    pub fn apply_logic(&self, context: &Context) -> String {
        self.responder.respond(context).to_string()
    }

    pub fn hello_world(&self, name: &str, context: &Context) -> HelloResult {
        self.hello_world_with(name, context, &mut rand::rng())
    }

    pub fn hello_world_with<R: Rng + ?Sized>(
        &self,
        name: &str,
        context: &Context,
        rng: &mut R,
    ) -> HelloResult {
        let ai_greeting = self.greeter.generate_with(name, rng);
        debug!(greeting = %ai_greeting, "generated greeting");

        let logical_response = self.apply_logic(context);
        let combined_message = format!("{} {}", ai_greeting, logical_response);

        HelloResult {
            ai_greeting,
            logical_response,
            combined_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NAME;
    use crate::context::{Mood, TimeOfDay};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hello_world_basic() {
        let logic = GenAiLogic::default();
        let result = logic.hello_world(DEFAULT_NAME, &Context::new());
        assert!(result.ai_greeting.contains("World"));
        assert_eq!(
            result.logical_response,
            "Logic processing complete - ready for action!"
        );
        assert_eq!(
            result.combined_message,
            format!("{} {}", result.ai_greeting, result.logical_response)
        );
    }

    #[test]
    fn test_hello_world_personalized() {
        let logic = GenAiLogic::default();
        let result = logic.hello_world("Alice", &Context::new());
        assert!(result.ai_greeting.contains("Alice"));
        assert!(result.combined_message.contains("Alice"));
    }

    #[test]
    fn test_hello_world_with_context() {
        let logic = GenAiLogic::default();
        let context = Context::new()
            .with_time(TimeOfDay::Evening)
            .with_mood(Mood::Focused);
        let result = logic.hello_world("Bob", &context);
        assert!(result.ai_greeting.contains("Bob"));
        assert!(result.logical_response.to_lowercase().contains("evening"));
        assert!(result.combined_message.to_lowercase().contains("evening"));
    }

    #[test]
    fn test_same_seed_same_result() {
        let logic = GenAiLogic::default();
        let context = Context::new().with_mood(Mood::Excited);
        let first = logic.hello_world_with("Charlie", &context, &mut StdRng::seed_from_u64(3));
        let second = logic.hello_world_with("Charlie", &context, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_with_custom_config() {
        let mut config = Config::default();
        config.greeting_templates = vec!["Yo {name}.".to_string()];
        let logic = GenAiLogic::new(config).unwrap();
        assert_eq!(logic.generate_greeting("Diana"), "Yo Diana.");

        let mut config = Config::default();
        config.greeting_templates = vec!["Yo.".to_string()];
        assert!(GenAiLogic::new(config).is_err());
    }

    #[test]
    fn test_result_json_field_order() {
        let result = HelloResult {
            ai_greeting: "a".to_string(),
            logical_response: "b".to_string(),
            combined_message: "a b".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"ai_greeting":"a","logical_response":"b","combined_message":"a b"}"#
        );
    }
}
