//! Command implementations.

pub mod chat;
pub mod configure;
pub mod extract;
pub mod merge;
pub mod preview;

pub use self::chat::execute_chat;
pub use self::configure::execute_config;
pub use self::extract::execute_extract;
pub use self::merge::execute_merge;
pub use self::preview::execute_preview;
