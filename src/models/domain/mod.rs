pub mod document;
pub mod generation;
pub use document::{Document, SourceKind};
pub use generation::{Difficulty, GenerationRequest, GenerationResult, Language};
