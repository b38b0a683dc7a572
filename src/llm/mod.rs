// Chat-completion integration: the Anthropic client and prompt templates.

pub mod client;
pub mod prompt;

pub use client::ChatClient;
