//! Serial link output.

pub mod hc06;

// Re-export the link for convenience
pub use hc06::{link_task, Hc06Link, BAUD_RATE};
