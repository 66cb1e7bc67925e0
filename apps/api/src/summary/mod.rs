// CV professional summary: remote completion with a template fallback.

pub mod composer;
pub mod handlers;
pub mod prompts;
