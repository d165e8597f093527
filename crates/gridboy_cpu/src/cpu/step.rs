use super::{table, Bus, Cpu, ImeState, StepError};

impl Cpu {
    /// Run one interrupt-controller check plus one fetch-decode-execute
    /// cycle, and return the number of T-cycles consumed.
    ///
    /// Any error leaves PC/SP untrustworthy; callers must stop driving
    /// this CPU rather than resynchronize blindly.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, StepError> {
        let result = self.step_inner(bus);
        if let Err(err) = &result {
            log::error!("cpu step failed: {}", err);
        }
        result
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> Result<u32, StepError> {
        // The scanline clock runs off the cycle counter; in this minimal
        // system the CPU loop owns it rather than a PPU tick component.
        self.tick_vblank_line(bus)?;

        if let Some(cycles) = self.service_interrupt(bus)? {
            self.cycles = self.cycles.wrapping_add(u64::from(cycles));
            return Ok(cycles);
        }

        let enable_queued = self.ime == ImeState::EnablePending;

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus)?;

        let cycles = if opcode == table::CB_PREFIX {
            let cb = self.fetch8(bus)?;
            if let Some(info) = table::decode(cb, true) {
                log::trace!("{:#06x}: cb {:#04x} {}", pc, cb, info.mnemonic);
            }
            self.exec_cb(bus, cb)?
        } else {
            if let Some(info) = table::decode(opcode, false) {
                log::trace!("{:#06x}: {:#04x} {}", pc, opcode, info.mnemonic);
            }
            self.exec_opcode(bus, opcode)?
        };

        // An enable queued by EI/RETI becomes effective once the
        // instruction *after* it has completed, which is exactly now.
        if enable_queued && self.ime == ImeState::EnablePending {
            self.ime = ImeState::Enabled;
        }

        self.cycles = self.cycles.wrapping_add(u64::from(cycles));
        Ok(cycles)
    }
}
