pub mod calendar_state;
pub mod ui_state;

pub use calendar_state::*;
pub use ui_state::*;
