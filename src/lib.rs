// Re-export modules
pub mod blocks;
pub mod builder;
pub mod canvas;
pub mod chat;
pub mod editor;
pub mod error;
pub mod model;
pub mod render;
pub mod seed;
pub mod store;
pub mod validate;

// Re-export commonly used types for convenience
pub use blocks::{BlockContent, BlockType};
pub use builder::{Builder, BuilderData, Notification, NotificationKind};
pub use canvas::Canvas;
pub use chat::ChatSession;
pub use editor::Editor;
pub use error::StoreError;
pub use model::{Component, Page, Site};
pub use seed::SeedData;
