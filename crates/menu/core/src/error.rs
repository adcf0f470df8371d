//! Domain errors surfaced by the menu data model.
//!
//! Widget operations are infallible; the only honest failure in this crate
//! is running out of inventory slots.

/// Errors raised by inventory mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Every slot is occupied and the item cannot stack onto an existing one.
    #[error("inventory is full ({slots} slots occupied)")]
    Full { slots: usize },
}
