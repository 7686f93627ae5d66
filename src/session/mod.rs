//! Round dispatcher: the outer control loop
//!
//! Classifies round identifiers into round kinds, runs each kind's
//! ordered task sequence at most once per distinct identifier, and
//! watches for the session-terminal conditions.

pub mod dispatcher;
pub mod rounds;
pub mod tasks;

pub use dispatcher::{Outcome, Session};
pub use rounds::RoundKind;
pub use tasks::RoundTask;
