use rand::Rng;

use crate::config::{DEFAULT_NAME, GREETING_TEMPLATES, NAME_PLACEHOLDER};
use crate::error::{Error, Result};

/// Picks one greeting template uniformly at random and fills in the name.
#[derive(Debug, Clone)]
pub struct GreetingGenerator {
    templates: Vec<String>,
}

impl GreetingGenerator {
    /// Build a generator from an ordered template list.
    ///
    /// The list must be non-empty and every template must contain the
    /// `{name}` placeholder exactly once.
    pub fn new(templates: Vec<String>) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::Template("no greeting templates configured".to_string()));
        }
        for template in &templates {
            let count = template.matches(NAME_PLACEHOLDER).count();
            if count != 1 {
                return Err(Error::Template(format!(
                    "expected exactly one {} in {:?}, found {}",
                    NAME_PLACEHOLDER, template, count
                )));
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn generate(&self, name: &str) -> String {
        self.generate_with(name, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> String {
        // new() guarantees at least one template
        let index = rng.random_range(0..self.templates.len());
        self.templates[index].replace(NAME_PLACEHOLDER, name)
    }

    pub fn generate_default(&self) -> String {
        self.generate(DEFAULT_NAME)
    }
}

impl Default for GreetingGenerator {
    fn default() -> Self {
        let templates = GREETING_TEMPLATES.iter().map(|t| t.to_string()).collect();
        Self::new(templates).expect("built-in greeting templates are valid")
    }
}
