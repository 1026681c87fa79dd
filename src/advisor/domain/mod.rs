//! Domain model for generative task advisory.
//!
//! Advisor values are ephemeral: requests validate the caller's input and
//! verdicts live only in the caller's working memory. Nothing in this module
//! touches the record store.

mod error;
mod request;
mod verdict;

pub use error::AdvisorDomainError;
pub use request::{ClassifyRelevanceRequest, SuggestTasksRequest};
pub use verdict::RelevanceVerdict;
