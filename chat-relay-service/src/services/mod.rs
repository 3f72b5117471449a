pub mod generation;

pub use generation::{GenerationClient, GenerationError};
