//! Action facade consumed by the presentation tier.
//!
//! Every operation returns an [`ActionOutcome`] envelope: failures are
//! absorbed at this boundary and converted to user-visible messages, never
//! propagated as raw errors. This is the only module the presentation tier
//! talks to.

mod actions;
mod outcome;

pub use actions::MaintenanceActions;
pub use outcome::ActionOutcome;

#[cfg(test)]
mod tests;
