// CV assistant: prompt assembly, the single LLM call, and reply cleanup.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod conversation;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod service;
