pub mod clock_face;
pub mod core;
pub mod debug_ui;
pub mod input;
pub mod readout;
