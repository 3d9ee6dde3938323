//! Retired-instruction and cycle counters.
//!
//! On a RISC-V machine-mode target these read the `minstret` and `mcycle`
//! CSRs; everywhere else a monotonic-clock stand-in keeps the harness
//! runnable on development hosts. Counters are read-only collaborators:
//! they feed delta measurements, never control decisions.

#[cfg(not(target_arch = "riscv64"))]
use std::time::Instant;

/// One snapshot of both counters.
#[derive(Clone, Copy, Debug)]
pub struct CounterReading {
    pub instructions: u64,
    pub cycles: u64,
}

/// Counters attributed to one inference (end minus start).
#[derive(Clone, Copy, Debug)]
pub struct CounterDelta {
    pub instructions: u64,
    pub cycles: u64,
}

impl CounterReading {
    /// Explicit end - start with wraparound-safe unsigned subtraction.
    pub fn delta_since(self, start: CounterReading) -> CounterDelta {
        CounterDelta {
            instructions: self.instructions.wrapping_sub(start.instructions),
            cycles: self.cycles.wrapping_sub(start.cycles),
        }
    }
}

/// A source of monotonically increasing instruction and cycle counts.
pub trait PerfCounters {
    fn read(&self) -> CounterReading;
}

/// Hardware counters on a RISC-V machine-mode target.
#[cfg(target_arch = "riscv64")]
#[derive(Clone, Copy, Debug, Default)]
pub struct RiscvCounters;

#[cfg(target_arch = "riscv64")]
impl RiscvCounters {
    pub fn new() -> Self {
        RiscvCounters
    }
}

#[cfg(target_arch = "riscv64")]
impl PerfCounters for RiscvCounters {
    fn read(&self) -> CounterReading {
        let instructions: u64;
        let cycles: u64;
        unsafe {
            core::arch::asm!("csrr {0}, minstret", out(reg) instructions, options(nomem, nostack));
            core::arch::asm!("csrr {0}, mcycle", out(reg) cycles, options(nomem, nostack));
        }
        CounterReading {
            instructions,
            cycles,
        }
    }
}

/// Monotonic-clock stand-in for hosts without RISC-V CSRs. Both counters
/// report nanoseconds since construction.
#[cfg(not(target_arch = "riscv64"))]
#[derive(Clone, Copy, Debug)]
pub struct HostCounters {
    origin: Instant,
}

#[cfg(not(target_arch = "riscv64"))]
impl HostCounters {
    pub fn new() -> Self {
        HostCounters {
            origin: Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "riscv64"))]
impl Default for HostCounters {
    fn default() -> Self {
        HostCounters::new()
    }
}

#[cfg(not(target_arch = "riscv64"))]
impl PerfCounters for HostCounters {
    fn read(&self) -> CounterReading {
        let nanos = self.origin.elapsed().as_nanos() as u64;
        CounterReading {
            instructions: nanos,
            cycles: nanos,
        }
    }
}

/// The counter implementation for the build target.
#[cfg(target_arch = "riscv64")]
pub type NativeCounters = RiscvCounters;

/// The counter implementation for the build target.
#[cfg(not(target_arch = "riscv64"))]
pub type NativeCounters = HostCounters;
