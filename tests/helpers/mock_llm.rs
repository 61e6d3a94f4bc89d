// ABOUTME: Scripted LLM provider for orchestration and route tests
// ABOUTME: Counts completion calls and records the last request it received
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fitlyst::llm::{ChatRequest, ChatResponse, LlmProvider};
use fitlyst_core::errors::{AppError, ErrorCode};

/// What the mock answers with
#[derive(Clone)]
pub enum MockReply {
    /// Completion text
    Text(String),
    /// Provider failure with this code and message
    Error(ErrorCode, String),
}

/// Provider returning a fixed reply
pub struct MockLlmProvider {
    has_credentials: bool,
    reply: MockReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockLlmProvider {
    /// Provider with a key that answers with `text`
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            has_credentials: true,
            reply: MockReply::Text(text.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Provider with a key that fails every call
    pub fn failing(error: &AppError) -> Arc<Self> {
        Arc::new(Self {
            has_credentials: true,
            reply: MockReply::Error(error.code, error.message.clone()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Provider without a key; any call would be a bug
    pub fn without_credentials() -> Arc<Self> {
        Arc::new(Self {
            has_credentials: false,
            reply: MockReply::Text("[]".to_owned()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    fn has_credentials(&self) -> bool {
        self.has_credentials
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.reply {
            MockReply::Text(text) => Ok(ChatResponse {
                content: text.clone(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            MockReply::Error(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}
