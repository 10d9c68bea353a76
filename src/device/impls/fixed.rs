//! [`AcceleratorProbe`](super::super::AcceleratorProbe) implementation with a fixed answer.

use super::super::AcceleratorProbe;

/// A probe that always reports the given availability.
///
/// Lets tests and embedding applications decide device selection themselves
/// instead of leaving it to whatever machine the process happens to run on.
#[derive(Clone, Copy, Debug)]
pub struct FixedProbe(pub bool);

impl AcceleratorProbe for FixedProbe {
    fn is_available(&self) -> bool {
        self.0
    }
}
