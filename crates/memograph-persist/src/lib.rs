pub mod error;
pub mod models;
pub mod mongo;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{Message, MessageDraft, MessageRole, Metadata, Thread, ThreadStatus};
pub use mongo::MongoStore;
pub use store::GraphStore;
