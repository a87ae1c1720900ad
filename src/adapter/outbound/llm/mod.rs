//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! for OpenAI-compatible chat completion providers.

pub mod openai;
