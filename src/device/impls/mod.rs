//! Implementations of [`AcceleratorProbe`](super::AcceleratorProbe).
//!
//! One file per implementation: [`system`] inspects the running machine, [`fixed`]
//! returns a caller-chosen answer (tests, dependency injection).

mod fixed;
mod system;

pub use fixed::FixedProbe;
pub use system::SystemProbe;
