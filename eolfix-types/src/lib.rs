//! Shared DTOs for the eolfix workspace.
//!
//! # Design constraints
//! - Wire types mirror what the hosting platform's API actually returns.
//! - Be *tolerant* when deserializing: unknown fields are ignored, optional
//!   fields may be absent. Payloads grow over time; eolfix's job is to stay
//!   useful with payloads "as found".

pub mod event;
pub mod files;
pub mod outcome;
