// LinkedIn post generation for SME profiles.
// Implements: submission validation, prompt composition, post formatting, HTTP surface.
// All generation calls go through llm_client::TextGenerator.

pub mod formatting;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod page;
pub mod prompts;
pub mod validation;

#[cfg(test)]
pub mod test_support;
