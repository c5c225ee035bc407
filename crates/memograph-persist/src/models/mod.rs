mod message;
mod thread;

pub use message::{Message, MessageDraft, MessageRole};
pub use thread::{Thread, ThreadStatus};

/// Open key-value bag attached to threads and messages
pub type Metadata = serde_json::Map<String, serde_json::Value>;
