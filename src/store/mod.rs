//! In-memory stores for polls, forms and the view preference.
//!
//! The stores are the source of truth for all application data for the
//! lifetime of the process.

mod forms;
mod ids;
mod polls;
mod view;

pub use forms::*;
pub use ids::*;
pub use polls::*;
pub use view::*;
