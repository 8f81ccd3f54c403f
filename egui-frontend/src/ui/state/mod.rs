//! # State Modules
//!
//! Screen state split by concern, so each piece can be reasoned about and
//! tested on its own:
//! - `access_state` - per-salesperson hunter mode flags
//! - `goal_state` - draft buffers behind the goals tab widgets
//! - `modal_state` - dialog visibility and per-dialog input buffers
//! - `ui_state` - transient user feedback messages

pub mod access_state;
pub mod goal_state;
pub mod modal_state;
pub mod ui_state;

pub use access_state::*;
pub use goal_state::*;
pub use modal_state::*;
pub use ui_state::*;
