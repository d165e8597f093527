pub mod console;
pub mod cpu;

pub use console::{ConsoleId, ConsoleRegistry, CpuSnapshot, SharedBus};
pub use cpu::{Bus, BusFault, Cpu, StepError};

/// Nominal DMG master clock in T-cycles per second.
///
/// The pacing loop owes `1e9 / CLOCK_HZ` nanoseconds of wall-clock time
/// per executed cycle.
pub const CLOCK_HZ: u64 = 4_194_000;

/// T-cycles per full display frame (154 scanlines of 456 cycles each).
pub const CYCLES_PER_FRAME: u64 = 70_224;

/// T-cycles per scanline.
pub const CYCLES_PER_LINE: u64 = 456;

/// Scanline index at which the vertical blanking period begins.
pub const VBLANK_LINE: u64 = 144;
