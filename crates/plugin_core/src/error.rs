use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The snapshot had no first element to read a type from.
    #[error("selection is empty: no node at index 0")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("selection observer failed: {0}")]
    Selection(#[from] SelectionError),
}
