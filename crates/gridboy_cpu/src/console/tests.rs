use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::*;
use crate::cpu::{BusFault, StepError};
use crate::CLOCK_HZ;

/// In-memory store with one flat 64KB space per console id, plus an
/// optional poisoned address to model transport faults.
struct TestStore {
    spaces: Mutex<HashMap<ConsoleId, Box<[u8; 0x10000]>>>,
    poisoned: Option<u16>,
}

impl TestStore {
    fn new() -> Self {
        Self {
            spaces: Mutex::new(HashMap::new()),
            poisoned: None,
        }
    }

    fn poisoned_at(addr: u16) -> Self {
        Self {
            poisoned: Some(addr),
            ..Self::new()
        }
    }

    fn load(&self, id: ConsoleId, base: u16, bytes: &[u8]) {
        let mut spaces = self.spaces.lock().unwrap();
        let space = spaces
            .entry(id)
            .or_insert_with(|| Box::new([0u8; 0x10000]));
        space[base as usize..base as usize + bytes.len()].copy_from_slice(bytes);
    }
}

impl SharedBus for TestStore {
    fn read8(&self, id: ConsoleId, addr: u16) -> Result<u8, BusFault> {
        if self.poisoned == Some(addr) {
            return Err(BusFault::Read {
                addr,
                reason: "poisoned".to_string(),
            });
        }
        let mut spaces = self.spaces.lock().unwrap();
        let space = spaces
            .entry(id)
            .or_insert_with(|| Box::new([0u8; 0x10000]));
        Ok(space[addr as usize])
    }

    fn write8(&self, id: ConsoleId, addr: u16, value: u8) -> Result<(), BusFault> {
        if self.poisoned == Some(addr) {
            return Err(BusFault::Write {
                addr,
                reason: "poisoned".to_string(),
            });
        }
        let mut spaces = self.spaces.lock().unwrap();
        let space = spaces
            .entry(id)
            .or_insert_with(|| Box::new([0u8; 0x10000]));
        space[addr as usize] = value;
        Ok(())
    }
}

#[test]
fn snapshot_of_unseen_id_is_none() {
    let registry = ConsoleRegistry::new(Arc::new(TestStore::new()));
    assert!(registry.snapshot(7).is_none());
}

#[test]
fn first_step_creates_a_zeroed_console() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());

    // An all-zero space executes NOPs.
    let cycles = registry.step_once(3).unwrap();
    assert_eq!(cycles, 4);

    let snapshot = registry.snapshot(3).unwrap();
    assert_eq!(snapshot.regs.pc, 0x0001);
    assert_eq!(snapshot.regs.a, 0x00);
    assert_eq!(snapshot.cycles, 4);
    assert!(snapshot.running);
}

#[test]
fn consoles_are_isolated_by_id() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    store.load(0, 0x0000, &[0x3E, 0x11]); // LD A, 0x11
    store.load(1, 0x0000, &[0x3E, 0x22]); // LD A, 0x22

    registry.step_once(0).unwrap();
    registry.step_once(1).unwrap();

    assert_eq!(registry.snapshot(0).unwrap().regs.a, 0x11);
    assert_eq!(registry.snapshot(1).unwrap().regs.a, 0x22);
}

#[test]
fn halt_ends_the_free_running_loop() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    store.load(0, 0x0000, &[0x3E, 0x05, 0x76]); // LD A, 5; HALT

    registry.start(0).unwrap();
    registry.wait(0).unwrap();

    let snapshot = registry.snapshot(0).unwrap();
    assert!(!snapshot.running);
    assert_eq!(snapshot.regs.a, 0x05);
    assert_eq!(snapshot.regs.pc, 0x0003);
}

#[test]
fn stop_cancels_and_joins_a_spinning_loop() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    store.load(0, 0x0000, &[0xC3, 0x00, 0x00]); // JP 0x0000

    registry.start(0).unwrap();
    // Starting an already-running console is a no-op.
    registry.start(0).unwrap();
    std::thread::sleep(Duration::from_millis(10));
    registry.stop(0).unwrap();

    let snapshot = registry.snapshot(0).unwrap();
    assert!(snapshot.cycles > 0, "the loop made progress before stop");
    assert!(snapshot.running, "cancellation is external to the CPU state");
}

#[test]
fn bus_fault_kills_the_loop_with_a_step_error() {
    let store = Arc::new(TestStore::poisoned_at(0x0002));
    let registry = ConsoleRegistry::new(store.clone());

    // Two NOPs, then the fetch at the poisoned address fails.
    registry.start(0).unwrap();
    let err = registry.wait(0).unwrap_err();

    let step_err = err.downcast_ref::<StepError>().expect("a StepError cause");
    assert!(matches!(
        step_err,
        StepError::Bus(BusFault::Read { addr: 0x0002, .. })
    ));
    assert!(!registry.snapshot(0).unwrap().running);
}

#[test]
fn illegal_opcode_kills_the_loop() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    store.load(0, 0x0000, &[0xD3]); // opcode hole

    registry.start(0).unwrap();
    let err = registry.wait(0).unwrap_err();

    let step_err = err.downcast_ref::<StepError>().expect("a StepError cause");
    assert_eq!(
        *step_err,
        StepError::IllegalOpcode {
            opcode: 0xD3,
            pc: 0x0000
        }
    );
    assert!(!registry.snapshot(0).unwrap().running);
}

#[test]
fn single_step_serializes_against_the_loop() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    store.load(0, 0x0000, &[0xC3, 0x00, 0x00]); // JP 0x0000

    registry.start(0).unwrap();
    for _ in 0..32 {
        registry.step_once(0).unwrap();
    }
    registry.stop(0).unwrap();

    // The JP loop only ever lands PC on 0x0000..=0x0002, regardless of
    // how the administrative steps interleaved.
    let pc = registry.snapshot(0).unwrap().regs.pc;
    assert!(pc <= 0x0002, "pc {pc:#06x} escaped the loop body");
}

#[test]
fn pacing_loop_takes_at_least_the_owed_wall_clock_time() {
    let store = Arc::new(TestStore::new());
    let registry = ConsoleRegistry::new(store.clone());
    // 4096 NOPs followed by HALT: roughly 16k cycles, i.e. ~3.9ms at
    // the nominal clock.
    store.load(0, 0x1000, &[0x76]);

    let started = Instant::now();
    registry.start(0).unwrap();
    registry.wait(0).unwrap();
    let elapsed = started.elapsed();

    let cycles = registry.snapshot(0).unwrap().cycles;
    let owed = Duration::from_nanos(cycles * 1_000_000_000 / CLOCK_HZ);
    assert!(
        elapsed >= owed,
        "loop finished in {elapsed:?}, owed at least {owed:?}"
    );
}
