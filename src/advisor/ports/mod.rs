//! Port contracts for the advisor module.

mod backend;

pub use backend::{GenerativeBackend, GenerativeBackendError, GenerativeBackendResult};
