//! Mock translator for deterministic testing.
//!
//! Returns pre-configured translations without spawning any subprocess.

use async_trait::async_trait;
use porter_core::{Command, PorterError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::translator::Translator;

/// A mock translator with a scripted response per instruction.
///
/// # Example
/// ```
/// use porter_queue::mock::MockTranslator;
/// let translator = MockTranslator::new()
///     .with_translation("list files", "ls -la")
///     .with_failure("bad", "exit status 1");
/// ```
pub struct MockTranslator {
    responses: HashMap<String, std::result::Result<Command, String>>,
    /// Every instruction this mock was asked to translate, in call order.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a successful translation for `instruction`.
    pub fn with_translation(
        mut self,
        instruction: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        self.responses
            .insert(instruction.into(), Ok(command.into()));
        self
    }

    /// Script a translation failure for `instruction`.
    pub fn with_failure(
        mut self,
        instruction: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.responses
            .insert(instruction.into(), Err(reason.into()));
        self
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, instruction: &str) -> Result<Command> {
        self.requests.lock().unwrap().push(instruction.to_string());

        match self.responses.get(instruction) {
            Some(Ok(command)) => Ok(command.clone()),
            Some(Err(reason)) => Err(PorterError::Translation {
                instruction: instruction.to_string(),
                reason: reason.clone(),
            }),
            None => Err(PorterError::Translation {
                instruction: instruction.to_string(),
                reason: "no scripted response".into(),
            }),
        }
    }
}
