//! Simulation errors.

/// Errors reported by the terminal simulation.
///
/// The only failure class is a caller passing an index that does not
/// exist in the menu. The state is left untouched when this happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("Menu index {index} out of range (menu has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}
