use crate::cpu::{Bus, Cpu, ImeState, StepError};

impl Cpu {
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> Result<u32, StepError> {
        // STOP is officially a 2-byte instruction; the second byte is
        // padding. Fetch and discard it so PC matches hardware.
        let _padding = self.fetch8(bus)?;
        Ok(4)
    }

    pub(super) fn exec_di(&mut self) -> Result<u32, StepError> {
        // DI takes effect immediately and cancels a queued enable.
        self.ime = ImeState::Disabled;
        Ok(4)
    }

    pub(super) fn exec_ei(&mut self) -> Result<u32, StepError> {
        // IME becomes enabled only after the *next* instruction completes.
        self.queue_ime_enable();
        Ok(4)
    }
}
