//! API 处理器

pub mod health;
pub mod tags;
pub mod translation;

pub use health::*;
pub use tags::*;
pub use translation::*;
