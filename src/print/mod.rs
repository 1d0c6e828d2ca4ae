//! Print representation of an invoice.
//!
//! The page planner spreads line items over fixed-capacity pages and keeps
//! the last two items on a page of their own, so the totals block always
//! has room under a short table. [`PrintPlan`] puts the planner, the
//! billing cascade and the total in words together for a renderer.

mod layout;
mod paginate;
mod plan;

pub use layout::*;
pub use paginate::*;
pub use plan::*;
