//! Command execution — deadline-bounded invocation of external programs.
//!
//! Every possible outcome of an invocation (exit, failure, hang, missing
//! binary) is reduced to an [`ExecutionResult`] value. Nothing in this
//! module raises past its own boundary: batch callers depend on continuing
//! past any single command's failure.

pub mod engine;
pub mod result;

pub use engine::{split_command_line, ExecutionEngine};
pub use result::{ExecStatus, ExecutionResult, ReturnCode, TIMEOUT_OUTPUT};
