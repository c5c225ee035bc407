//! Prompt templates for the completion-backed capabilities.
//!
//! `<text>` and `<conversation>` placeholders are substituted at call time.

pub const TOPIC_EXTRACTION_PROMPT: &str = "\
Extract the main topics from the following text. Return them as a comma-separated list:

Text: <text>

Topics:";

pub const THREAD_SUMMARY_PROMPT: &str = "\
Summarize the key points of this conversation thread concisely:

<conversation>

Summary:";
