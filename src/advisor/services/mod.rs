//! Application services for generative task advisory.

mod advisor;

pub use advisor::TaskAdvisor;
