//! Custom actions for the order ledger.
//!
//! Orders are never edited directly. Their status changes only through [`OrderAction`],
//! broadcast to every order by the sweep scheduler.

/// Actions applied to orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order one step along its delivery progression.
    ///
    /// Returns the [`StatusChange`](crate::model::StatusChange), or `None` when the order
    /// was already delivered.
    Advance,
}
