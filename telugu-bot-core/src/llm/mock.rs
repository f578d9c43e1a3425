//! Mock generator for testing
//!
//! This module provides a mock implementation of the TextGenerator trait
//! for use in unit tests only. It is not available in production builds.

#![cfg(test)]

use super::errors::LLMError;
use super::traits::TextGenerator;
use super::types::{Generation, GenerationRequest};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock generator for testing
///
/// Queued errors take priority over queued responses. With nothing queued
/// the mock echoes the rendered prompt, which keeps it deterministic.
#[derive(Clone, Default)]
pub struct MockGenerator {
    responses: Arc<Mutex<Vec<Generation>>>,
    errors: Arc<Mutex<Vec<LLMError>>>,
    call_history: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that always answers with `text`
    pub fn replying(text: &str) -> Self {
        let mock = Self::new();
        mock.add_response(Generation::text(text));
        mock
    }

    /// Add a response to return (popped last-in first-out)
    pub fn add_response(&self, response: Generation) {
        self.responses.lock().unwrap().push(response);
    }

    /// Add an error to return
    pub fn add_error(&self, error: LLMError) {
        self.errors.lock().unwrap().push(error);
    }

    pub fn call_history(&self) -> Vec<GenerationRequest> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LLMError> {
        self.call_history.lock().unwrap().push(request.clone());

        if let Some(error) = self.errors.lock().unwrap().pop() {
            return Err(error);
        }

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Ok(Generation::text(format!("echo: {}", request.prompt()))),
            // keep the last response so a mock can answer repeatedly
            1 => Ok(responses[0].clone()),
            _ => Ok(responses.pop().unwrap_or_default()),
        }
    }
}
