pub mod store;

pub use store::LocalStore;

use std::sync::Arc;

use anyhow::Result;
use gridboy_cpu::{ConsoleId, ConsoleRegistry};

/// Console id used by the single-console local runner.
const LOCAL_CONSOLE: ConsoleId = 0;

/// Load a ROM image into a fresh local store and run one console on it
/// at the nominal clock rate until the program halts or fails.
pub fn run(rom_data: &[u8]) -> Result<()> {
    let store = Arc::new(LocalStore::new());
    store.load_rom(LOCAL_CONSOLE, rom_data);

    let registry = ConsoleRegistry::new(store);
    registry.start(LOCAL_CONSOLE)?;
    let outcome = registry.wait(LOCAL_CONSOLE);

    if let Some(snapshot) = registry.snapshot(LOCAL_CONSOLE) {
        log::info!(
            "console {}: final pc {:#06x}, a {:#04x}, {} cycles",
            LOCAL_CONSOLE,
            snapshot.regs.pc,
            snapshot.regs.a,
            snapshot.cycles
        );
    }

    outcome
}
