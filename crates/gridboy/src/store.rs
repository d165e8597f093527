//! Local in-process stand-in for the shared memory service.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, RwLock};

use gridboy_cpu::{BusFault, ConsoleId, SharedBus};

/// Byte count of one console's flat address space.
const SPACE_SIZE: usize = 0x10000;
/// End of the cartridge ROM region populated by `load_rom`.
const ROM_END: usize = 0x8000;
/// Cartridge RAM region, cleared whenever a new image is loaded.
const CART_RAM: std::ops::Range<usize> = 0xA000..0xC000;

/// One flat 64KB space per console id, created zeroed on first touch.
///
/// Plain storage is sufficient here: the interpreter performs its own
/// read-modify-write on the IE/IF registers, and no banking exists for
/// the 32KB no-MBC cartridges this system supports.
pub struct LocalStore {
    spaces: RwLock<HashMap<ConsoleId, Mutex<Box<[u8; SPACE_SIZE]>>>>,
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore {
    pub fn new() -> Self {
        Self {
            spaces: RwLock::new(HashMap::new()),
        }
    }

    /// Copy a ROM image into the console's cartridge region and clear
    /// its cartridge RAM, the loader collaborator's contract before a
    /// first step.
    ///
    /// Images larger than the fixed 32KB region are truncated; bank
    /// switching is not supported.
    pub fn load_rom(&self, id: ConsoleId, image: &[u8]) {
        let len = image.len().min(ROM_END);
        if image.len() > ROM_END {
            log::warn!(
                "console {}: ROM image is {} bytes, truncating to 32KB (no MBC support)",
                id,
                image.len()
            );
        }

        self.with_space(id, |space| {
            space[..len].copy_from_slice(&image[..len]);
            space[CART_RAM].fill(0);
        });
        log::info!("console {}: loaded {} ROM bytes", id, len);
    }

    fn with_space<R>(&self, id: ConsoleId, f: impl FnOnce(&mut [u8; SPACE_SIZE]) -> R) -> R {
        {
            let spaces = match self.spaces.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(space) = spaces.get(&id) {
                let mut guard = lock_space(space);
                return f(&mut guard);
            }
        }

        let mut spaces = match self.spaces.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let space = spaces
            .entry(id)
            .or_insert_with(|| Mutex::new(Box::new([0u8; SPACE_SIZE])));
        let mut guard = lock_space(space);
        f(&mut guard)
    }
}

fn lock_space(space: &Mutex<Box<[u8; SPACE_SIZE]>>) -> MutexGuard<'_, Box<[u8; SPACE_SIZE]>> {
    match space.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl SharedBus for LocalStore {
    fn read8(&self, id: ConsoleId, addr: u16) -> Result<u8, BusFault> {
        Ok(self.with_space(id, |space| space[addr as usize]))
    }

    fn write8(&self, id: ConsoleId, addr: u16, value: u8) -> Result<(), BusFault> {
        self.with_space(id, |space| space[addr as usize] = value);
        Ok(())
    }
}
