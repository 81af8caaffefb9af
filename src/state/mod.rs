//! Application state module

mod app_state;
mod forms;
mod ledger;
mod progress;

pub use app_state::*;
pub use forms::*;
pub use ledger::*;
pub use progress::*;
