//! Spring animation for Micpress
//!
//! Physics-based springs driven by explicit frame ticks. There is no
//! frame clock or scheduler here; the embedding render loop calls
//! [`Animatable::tick`] with its frame timestamps and reads the value
//! back.

mod animation;

pub use animation::*;
