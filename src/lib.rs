//! Multi-agent cookbook: chat-model agents, simple workflows, and a throttled
//! chunk-by-chunk document summarizer.

pub mod agents;
pub mod config;
pub mod console;
pub mod document;
pub mod llm;
pub mod orchestrator;
pub mod recipes;
pub mod summarize;
pub mod tools;
pub mod types;
pub mod workflow;
