//! Request-scoped domain types. Nothing here outlives a single request.

pub mod completion;
pub mod task;
