//! Sharp LR35902 interpreter core.
//!
//! The CPU is a plain mutable aggregate stepped against a [`Bus`]; all
//! memory and IO, including the IE/IF interrupt registers, live behind
//! the bus so the core never holds copies that could desynchronize from
//! the shared store.

mod alu;
mod cb;
mod exec;
mod helpers;
mod interrupt;
mod regs;
mod step;
pub mod table;


pub use interrupt::{ImeState, IntSource, IE_ADDR, IF_ADDR};
pub use regs::{Flag, Registers};

use thiserror::Error;

/// Error raised by a bus backend when a single byte access cannot be
/// completed. In the service deployment this is a transport failure; a
/// local array-backed store never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusFault {
    #[error("bus read at {addr:#06x} failed: {reason}")]
    Read { addr: u16, reason: String },
    #[error("bus write at {addr:#06x} failed: {reason}")]
    Write { addr: u16, reason: String },
}

/// Fatal outcome of a single CPU step.
///
/// None of these are retried: after any of them PC/SP can no longer be
/// trusted, so the owning execution loop must stop rather than guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// One of the hardware's opcode holes (0xD3, 0xDB, 0xDD, 0xE3, 0xE4,
    /// 0xEB..0xED, 0xF4, 0xFC, 0xFD), or the CB prefix byte reaching
    /// primary dispatch.
    #[error("illegal opcode {opcode:#04x} at pc {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },
    /// A table-legal opcode with no dispatch arm. Distinguished from
    /// [`StepError::IllegalOpcode`] because it marks an emulation
    /// coverage gap, not a defect in the running program.
    #[error("unimplemented opcode {opcode:#04x} (cb prefixed: {prefixed}) at pc {pc:#06x}")]
    Unimplemented { opcode: u8, prefixed: bool, pc: u16 },
    #[error(transparent)]
    Bus(#[from] BusFault),
}

/// Abstraction over the 64KB memory and IO address space the CPU reads
/// and writes. Addresses at 0xFF00 and above are memory-mapped IO.
///
/// Every access is fallible: in the service deployment the backing store
/// is remote, and a failed access invalidates the step that issued it.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> Result<u8, BusFault>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusFault>;
}

/// Game Boy CPU state.
///
/// One instance per emulated console, owned by that console's execution
/// loop. Power-on state is all zeros; the loader collaborator is
/// responsible for placing a program at 0x0000 before the first step.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable, modeled as the explicit tri-state so the
    /// one-instruction EI latency has a single legal transition path.
    pub ime: ImeState,
    /// Wrapping count of elapsed T-cycles since power-on. Drives the
    /// vblank line clock and the real-time pacing loop; never reset.
    pub cycles: u64,
    /// Liveness flag for the free-running loop. Cleared by HALT and by
    /// console teardown; single stepping ignores it.
    pub running: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: ImeState::Disabled,
            cycles: 0,
            running: true,
        }
    }

    /// Reset to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Scanline the display would be drawing at the current cycle count.
    #[inline]
    pub fn line(&self) -> u64 {
        (self.cycles % crate::CYCLES_PER_FRAME) / crate::CYCLES_PER_LINE
    }
}
