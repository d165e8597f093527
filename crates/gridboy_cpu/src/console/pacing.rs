//! The free-running pacing loop: repeated stepping throttled to the
//! nominal 4.194 MHz clock.

use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::cpu::StepError;
use crate::CLOCK_HZ;

use super::{Console, ConsoleBus, ConsoleId, SharedBus};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Drive the console until it halts, a step fails, or the cancel flag is
/// raised.
///
/// Throttling computes the owed wall-clock time from the running total
/// of executed cycles, not per-iteration deltas, so rounding remainders
/// carry forward and the loop cannot drift from the nominal rate. The
/// wait itself is a busy spin, trading CPU burn for sub-millisecond
/// pacing precision.
pub(super) fn run_loop(
    console: &Console,
    store: &dyn SharedBus,
    id: ConsoleId,
) -> Result<(), StepError> {
    log::info!("console {}: loop started", id);
    let started = Instant::now();
    let mut executed: u64 = 0;

    loop {
        if console.cancel.load(Ordering::Acquire) {
            log::info!("console {}: loop canceled", id);
            return Ok(());
        }

        let cycles = {
            let mut cpu = console.lock_cpu();
            if !cpu.running {
                log::info!("console {}: halted after {} cycles", id, cpu.cycles);
                return Ok(());
            }
            let mut bus = ConsoleBus { store, id };
            match cpu.step(&mut bus) {
                Ok(cycles) => cycles,
                Err(err) => {
                    // PC/SP are no longer trustworthy; stop rather than
                    // resynchronize blindly.
                    cpu.running = false;
                    log::error!("console {}: loop stopped: {}", id, err);
                    return Err(err);
                }
            }
        };

        executed += u64::from(cycles);
        let owed_nanos = u128::from(executed) * NANOS_PER_SEC / u128::from(CLOCK_HZ);
        while started.elapsed().as_nanos() < owed_nanos {
            if console.cancel.load(Ordering::Acquire) {
                log::info!("console {}: loop canceled", id);
                return Ok(());
            }
            std::hint::spin_loop();
        }
    }
}
