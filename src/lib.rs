//! Bitacora: equipment maintenance record keeping.
//!
//! This crate persists equipment maintenance records and offers generative
//! task advisory: callers create, list, edit, and delete records, request
//! AI-suggested maintenance tasks for an equipment type, and classify
//! whether a task description is relevant to its equipment context.
//!
//! # Architecture
//!
//! Bitacora follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`record`]: Maintenance record persistence and queries
//! - [`advisor`]: Generative task suggestion and relevance classification
//! - [`facade`]: Action boundary consumed by the presentation tier
//! - [`config`]: Process configuration and presentation vocabularies

pub mod advisor;
pub mod config;
pub mod facade;
pub mod record;
