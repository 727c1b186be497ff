use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Employee not found in arena: {0:?}")]
    EmployeeNotFound(Index),

    #[error("Cycle detected in reporting hierarchy at: {0}")]
    CycleDetected(String),

    #[error("Internal hierarchy operation failed: {0}")]
    InternalError(String),
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
