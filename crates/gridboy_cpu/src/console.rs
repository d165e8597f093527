//! Console registry: per-instance CPU ownership, lifecycle operations,
//! and the free-running pacing loop.
//!
//! Each console instance owns exactly one CPU, created zeroed on the
//! first reference to its id. The registry serializes an external
//! single-step against a console's free-running loop through the
//! per-console CPU lock; distinct consoles share nothing but the store.

mod pacing;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use anyhow::{anyhow, Context, Result};

use crate::cpu::{Bus, BusFault, Cpu, ImeState, Registers, StepError};

/// Opaque identifier scoping bus traffic and CPU-state lookup.
pub type ConsoleId = u32;

/// The shared memory store contract: a flat 64KB address space per
/// console id, with memory-mapped IO at 0xFF00 and above.
///
/// The core assumes nothing about the transport behind an
/// implementation; it only requires synchronous per-byte access with an
/// explicit outcome. One store serves every console, so implementations
/// must be safe to call from all console threads at once.
pub trait SharedBus: Send + Sync {
    fn read8(&self, id: ConsoleId, addr: u16) -> Result<u8, BusFault>;
    fn write8(&self, id: ConsoleId, addr: u16, value: u8) -> Result<(), BusFault>;
}

/// Single-console view of a [`SharedBus`], in the form the interpreter
/// consumes.
struct ConsoleBus<'a> {
    store: &'a dyn SharedBus,
    id: ConsoleId,
}

impl Bus for ConsoleBus<'_> {
    fn read8(&mut self, addr: u16) -> Result<u8, BusFault> {
        self.store.read8(self.id, addr)
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        self.store.write8(self.id, addr, value)
    }
}

/// Point-in-time copy of one console's CPU state, for debugging and
/// operator inspection.
#[derive(Clone, Copy, Debug)]
pub struct CpuSnapshot {
    pub regs: Registers,
    pub ime: ImeState,
    pub cycles: u64,
    pub running: bool,
}

struct Console {
    cpu: Mutex<Cpu>,
    /// Cancellation flag for the free-running loop, checked with acquire
    /// ordering at every iteration boundary.
    cancel: AtomicBool,
    worker: Mutex<Option<JoinHandle<Result<(), StepError>>>>,
}

impl Console {
    fn new() -> Self {
        Self {
            cpu: Mutex::new(Cpu::new()),
            cancel: AtomicBool::new(false),
            worker: Mutex::new(None),
        }
    }

    fn lock_cpu(&self) -> MutexGuard<'_, Cpu> {
        // A poisoned lock means a worker panicked mid-step; the state is
        // still the best available record of what happened.
        match self.cpu.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Owner of every console instance and the shared store they run
/// against.
pub struct ConsoleRegistry {
    store: Arc<dyn SharedBus>,
    consoles: Mutex<HashMap<ConsoleId, Arc<Console>>>,
}

impl ConsoleRegistry {
    pub fn new(store: Arc<dyn SharedBus>) -> Self {
        Self {
            store,
            consoles: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create the console for `id`. The first reference creates a
    /// fresh, zeroed CPU.
    fn console(&self, id: ConsoleId) -> Arc<Console> {
        let mut consoles = match self.consoles.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(consoles.entry(id).or_insert_with(|| {
            log::info!("console {}: created", id);
            Arc::new(Console::new())
        }))
    }

    fn existing(&self, id: ConsoleId) -> Option<Arc<Console>> {
        let consoles = match self.consoles.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        consoles.get(&id).cloned()
    }

    /// Execute exactly one step on the console, creating it if needed.
    ///
    /// Taking the CPU lock serializes this against the console's
    /// free-running loop, so an administrative step can never interleave
    /// with one the loop is executing.
    pub fn step_once(&self, id: ConsoleId) -> Result<u32, StepError> {
        let console = self.console(id);
        let mut cpu = console.lock_cpu();
        let mut bus = ConsoleBus {
            store: self.store.as_ref(),
            id,
        };
        cpu.step(&mut bus)
    }

    /// Spawn the free-running pacing loop for the console if it is not
    /// already running.
    ///
    /// If a previous loop for this id ended on a fatal step error, that
    /// error is returned here and the console is not restarted; recovery
    /// is an operator decision, typically a fresh console id.
    pub fn start(&self, id: ConsoleId) -> Result<()> {
        let console = self.console(id);
        let mut worker = match console.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = worker.take() {
            if !handle.is_finished() {
                *worker = Some(handle);
                return Ok(());
            }
            join_worker(id, handle)?;
        }

        console.cancel.store(false, Ordering::Release);
        let store = Arc::clone(&self.store);
        let spawned = Arc::clone(&console);
        let handle = std::thread::Builder::new()
            .name(format!("console-{}", id))
            .spawn(move || pacing::run_loop(&spawned, store.as_ref(), id))
            .context("failed to spawn console loop thread")?;
        *worker = Some(handle);
        Ok(())
    }

    /// Cancel the console's free-running loop and block until its thread
    /// has observed the flag and exited.
    ///
    /// Returns the loop's terminal error if it died on one.
    pub fn stop(&self, id: ConsoleId) -> Result<()> {
        let Some(console) = self.existing(id) else {
            return Ok(());
        };
        console.cancel.store(true, Ordering::Release);
        self.join(id, &console)
    }

    /// Block until the console's loop exits on its own (HALT or a fatal
    /// step error), without canceling it.
    pub fn wait(&self, id: ConsoleId) -> Result<()> {
        let Some(console) = self.existing(id) else {
            return Err(anyhow!("console {} was never started", id));
        };
        self.join(id, &console)
    }

    fn join(&self, id: ConsoleId, console: &Console) -> Result<()> {
        let handle = {
            let mut worker = match console.worker.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            worker.take()
        };
        match handle {
            Some(handle) => join_worker(id, handle),
            None => Ok(()),
        }
    }

    /// Point-in-time copy of the console's CPU state, or `None` if the
    /// id has never been referenced.
    pub fn snapshot(&self, id: ConsoleId) -> Option<CpuSnapshot> {
        let console = self.existing(id)?;
        let cpu = console.lock_cpu();
        Some(CpuSnapshot {
            regs: cpu.regs,
            ime: cpu.ime,
            cycles: cpu.cycles,
            running: cpu.running,
        })
    }
}

fn join_worker(id: ConsoleId, handle: JoinHandle<Result<(), StepError>>) -> Result<()> {
    match handle.join() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.into()),
        Err(_) => Err(anyhow!("console {} loop thread panicked", id)),
    }
}
