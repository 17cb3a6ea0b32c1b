pub mod clock_time;
pub mod drag_state;

pub use clock_time::*;
pub use drag_state::*;
