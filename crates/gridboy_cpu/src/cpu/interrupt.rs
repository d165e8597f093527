//! Interrupt controller: IME tri-state, IE/IF polling, and the scanline
//! clock that raises the vblank request.
//!
//! IE and IF live on the bus (0xFFFF / 0xFF0F) and are re-read on every
//! poll; the CPU keeps no private copies of either.

use bitflags::bitflags;

use super::{Bus, Cpu, StepError};
use crate::VBLANK_LINE;

/// Interrupt enable register address.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag (pending) register address.
pub const IF_ADDR: u16 = 0xFF0F;

/// T-cycles charged for one interrupt entry sequence.
const ENTRY_CYCLES: u32 = 20;

bitflags! {
    /// Interrupt source bits as laid out in both IE and IF.
    ///
    /// Bit order is also priority order: the lowest set bit wins when
    /// several sources fire together.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IntSource: u8 {
        const VBLANK = 1 << 0;
        const STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl IntSource {
    /// The highest-priority source among the fired bits, if any.
    pub fn highest_priority(fired: u8) -> Option<IntSource> {
        let fired = fired & Self::all().bits();
        if fired == 0 {
            return None;
        }
        IntSource::from_bits(1 << fired.trailing_zeros())
    }

    /// Fixed handler vector for this source. Expects exactly one bit set.
    pub fn vector(self) -> u16 {
        0x0040 + 8 * self.bits().trailing_zeros() as u16
    }
}

/// Interrupt master enable, with the one-instruction EI latency made
/// explicit.
///
/// The only legal transitions are:
/// - DI: any state -> `Disabled`, immediately.
/// - EI / RETI: `Disabled` -> `EnablePending`; a no-op when already
///   enabled or pending.
/// - `EnablePending` -> `Enabled` exactly once, after the instruction
///   *following* the EI/RETI completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImeState {
    Disabled,
    EnablePending,
    Enabled,
}

impl Cpu {
    /// Arm the delayed interrupt enable shared by EI and RETI.
    ///
    /// Re-arming while already pending is idempotent, and an
    /// already-enabled IME is left untouched.
    pub(super) fn queue_ime_enable(&mut self) {
        if self.ime == ImeState::Disabled {
            self.ime = ImeState::EnablePending;
        }
    }

    /// Raise the vblank request when the scanline clock sits in the
    /// first line of the blanking period.
    ///
    /// The line number is derived from the cycle counter; in this
    /// minimal system the CPU loop owns the scanline clock rather than a
    /// dedicated PPU tick component.
    pub(super) fn tick_vblank_line<B: Bus>(&mut self, bus: &mut B) -> Result<(), StepError> {
        if self.line() == VBLANK_LINE {
            let iflags = bus.read8(IF_ADDR)?;
            if iflags & IntSource::VBLANK.bits() == 0 {
                bus.write8(IF_ADDR, iflags | IntSource::VBLANK.bits())?;
            }
        }
        Ok(())
    }

    /// Service one pending interrupt if IME is enabled and IE & IF is
    /// nonzero.
    ///
    /// Entry disables IME, pushes PC (high byte first, matching the CALL
    /// convention), clears the serviced source's IF bit, and jumps to its
    /// vector. Only the single highest-priority source is serviced;
    /// lower-priority bits stay pending for a later check. Returns the
    /// cycles charged when an interrupt was taken.
    pub(super) fn service_interrupt<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Result<Option<u32>, StepError> {
        if self.ime != ImeState::Enabled {
            return Ok(None);
        }

        let ie = bus.read8(IE_ADDR)?;
        let iflags = bus.read8(IF_ADDR)?;
        let Some(source) = IntSource::highest_priority(ie & iflags) else {
            return Ok(None);
        };

        self.ime = ImeState::Disabled;

        let pc = self.regs.pc;
        self.push_u16(bus, pc)?;
        bus.write8(IF_ADDR, iflags & !source.bits())?;
        self.regs.pc = source.vector();

        log::trace!(
            "interrupt {:?} taken, pc {:#06x} -> {:#06x}",
            source,
            pc,
            self.regs.pc
        );

        Ok(Some(ENTRY_CYCLES))
    }
}
