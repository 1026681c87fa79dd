//! Adapter implementations for the advisor module.

pub mod gemini;
pub mod stub;
