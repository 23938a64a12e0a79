pub mod document;
pub mod library;

pub use document::*;
pub use library::*;
