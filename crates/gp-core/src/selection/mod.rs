//! Cross-page selection state.
//! 跨页选择状态
//!
//! The [`SelectionLedger`] is the authoritative record of which artworks are
//! selected, independent of the page currently on screen.

mod ledger;

pub use ledger::{ReconcileOutcome, SelectionLedger};

#[cfg(test)]
mod tests;
