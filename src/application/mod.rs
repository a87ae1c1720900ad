//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate outbound ports
//! to implement the note assistant and vault operations.

pub mod assistant;
pub mod completion;
pub mod vault;
