pub mod content;
pub mod engine;
pub mod layout;
pub mod sections;
pub mod text;
