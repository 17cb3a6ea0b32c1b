pub mod hand;

pub use hand::*;
