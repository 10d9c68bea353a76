//! [`AcceleratorProbe`](super::super::AcceleratorProbe) implementation that inspects the running machine.

use std::env;
use std::path::Path;

use super::super::AcceleratorProbe;

/// Path exposed by the NVIDIA kernel driver when it is loaded.
const NVIDIA_DRIVER_VERSION: &str = "/proc/driver/nvidia/version";

/// Probes the running machine for a usable CUDA accelerator.
///
/// Detection is read-only and heuristic. `CUDA_VISIBLE_DEVICES`, when set, is
/// authoritative: a device list means present, while an empty value or `-1`
/// hides every device (the CUDA runtime convention). When unset, the loaded
/// NVIDIA kernel driver counts as present.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl SystemProbe {
    /// Creates a system probe.
    #[must_use]
    pub fn new() -> Self {
        SystemProbe
    }
}

impl AcceleratorProbe for SystemProbe {
    fn is_available(&self) -> bool {
        match env::var("CUDA_VISIBLE_DEVICES") {
            Ok(list) => {
                let list = list.trim();
                !list.is_empty() && list != "-1"
            }
            Err(_) => Path::new(NVIDIA_DRIVER_VERSION).exists(),
        }
    }
}
