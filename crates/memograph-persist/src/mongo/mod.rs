mod message;
mod store;
mod thread;

pub use message::MessageRepository;
pub use store::MongoStore;
pub use thread::ThreadRepository;
