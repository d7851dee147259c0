//! Input acquisition: button edge capture and joystick sampling.

pub mod buttons;
pub mod sticks;

// Re-export acquisition tasks for convenience
pub use buttons::button_task;
pub use sticks::{left_stick_task, right_stick_task, SAMPLE_PERIOD_MS};
