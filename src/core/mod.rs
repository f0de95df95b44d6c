//! Core domain types for Mastermind
//!
//! Codes and feedback scoring. Everything here is pure; randomness is injected by the caller.

mod code;
mod feedback;

pub use code::{ALPHABET, CODE_LENGTH, CODE_SPACE_SIZE, Code, CodeError};
pub use feedback::{COLOR_MARKER, EXACT_MARKER, Feedback, MISS_MARKER};
