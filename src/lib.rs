//! Arena-based employee hierarchy with subordinate counting.
//!
//! Employees live in a generational arena and reference their direct reports
//! by index. The core operation, [`arena::OrgArena::count_subordinates`],
//! walks the subtree with an explicit stack and reports cycles as errors
//! instead of recursing forever.

pub mod arena;
pub mod cli;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod roster;
pub mod util;
