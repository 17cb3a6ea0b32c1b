pub mod adjust;
pub mod drag;
pub mod tick;

pub use adjust::*;
pub use drag::*;
pub use tick::*;
