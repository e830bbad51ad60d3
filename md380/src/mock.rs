//! Stub [`Engine`] for tests.
//!
//! Behaviour and counters live in thread-locals, so each test (which runs
//! on its own thread) sees its own engine world. Call [`reset`] first.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::engine::{Engine, STATUS_OK, Status};
use crate::frame::{AmbeFrame, PcmFrame};

const STATUS_FAIL: Status = -1;

/// Failure switches for the stub engine.
#[derive(Debug, Default)]
pub struct Behavior {
    pub fail_create: bool,
    pub fail_init: bool,
    pub fail_encode: bool,
    pub fail_decode: bool,
    /// Fail every encode once this many have succeeded.
    pub fail_encode_after: Option<usize>,
    /// Fail every decode once this many have succeeded.
    pub fail_decode_after: Option<usize>,
    /// Diagnostic returned by `last_error`.
    pub error: Option<String>,
}

/// Engine call counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub created: usize,
    pub inits: usize,
    pub encodes: usize,
    pub decodes: usize,
    pub destroyed: usize,
}

thread_local! {
    static BEHAVIOR: RefCell<Behavior> = RefCell::new(Behavior::default());
    static STATS: Cell<Stats> = Cell::new(Stats::default());
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
    static DESTROYED: RefCell<HashSet<u64>> = RefCell::new(HashSet::new());
}

/// Clears behaviour, counters and the destroy registry.
pub fn reset() {
    BEHAVIOR.with(|b| *b.borrow_mut() = Behavior::default());
    STATS.with(|s| s.set(Stats::default()));
    CALLS.with(|c| c.borrow_mut().clear());
    DESTROYED.with(|d| d.borrow_mut().clear());
}

/// Adjusts the stub behaviour.
pub fn configure(f: impl FnOnce(&mut Behavior)) {
    BEHAVIOR.with(|b| f(&mut b.borrow_mut()));
}

/// Returns a snapshot of the counters.
pub fn stats() -> Stats {
    STATS.with(|s| s.get())
}

/// Returns the engine calls made so far, in order.
pub fn calls() -> Vec<&'static str> {
    CALLS.with(|c| c.borrow().clone())
}

fn record(call: &'static str, f: impl FnOnce(&mut Stats)) {
    CALLS.with(|c| c.borrow_mut().push(call));
    STATS.with(|s| {
        let mut stats = s.get();
        f(&mut stats);
        s.set(stats);
    });
}

fn behavior<T>(f: impl FnOnce(&Behavior) -> T) -> T {
    BEHAVIOR.with(|b| f(&b.borrow()))
}

/// Stub engine. Panics if any handle is used after, or destroyed more
/// than once.
#[derive(Debug)]
pub struct MockEngine {
    id: u64,
}

impl MockEngine {
    fn check_live(&self) {
        let destroyed = DESTROYED.with(|d| d.borrow().contains(&self.id));
        assert!(!destroyed, "mock engine {} used after destroy", self.id);
    }
}

impl Engine for MockEngine {
    fn create() -> Option<Self> {
        if behavior(|b| b.fail_create) {
            return None;
        }
        let id = NEXT_ID.with(|n| {
            let id = n.get();
            n.set(id + 1);
            id
        });
        record("create", |s| s.created += 1);
        Some(Self { id })
    }

    fn init(&mut self) -> Status {
        self.check_live();
        record("init", |s| s.inits += 1);
        if behavior(|b| b.fail_init) {
            STATUS_FAIL
        } else {
            STATUS_OK
        }
    }

    fn encode(&mut self, pcm: &PcmFrame, ambe: &mut AmbeFrame) -> Status {
        self.check_live();
        let done = stats().encodes;
        record("encode", |s| s.encodes += 1);
        let fail = behavior(|b| b.fail_encode || b.fail_encode_after.is_some_and(|n| done >= n));
        if fail {
            return STATUS_FAIL;
        }

        for (i, s) in pcm.iter().enumerate() {
            let [lo, hi] = s.to_le_bytes();
            ambe[i % ambe.len()] ^= hi.rotate_left((i / ambe.len()) as u32) ^ lo;
        }
        STATUS_OK
    }

    fn decode(&mut self, ambe: &AmbeFrame, pcm: &mut PcmFrame) -> Status {
        self.check_live();
        let done = stats().decodes;
        record("decode", |s| s.decodes += 1);
        if behavior(|b| b.fail_decode || b.fail_decode_after.is_some_and(|n| done >= n)) {
            return STATUS_FAIL;
        }

        for (i, s) in pcm.iter_mut().enumerate() {
            *s = i16::from(ambe[i % ambe.len()] as i8) << 6;
        }
        STATUS_OK
    }

    fn last_error(&self) -> Option<String> {
        self.check_live();
        CALLS.with(|c| c.borrow_mut().push("last_error"));
        behavior(|b| b.error.clone())
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        let first = DESTROYED.with(|d| d.borrow_mut().insert(self.id));
        assert!(first, "mock engine {} destroyed twice", self.id);
        record("destroy", |s| s.destroyed += 1);
    }
}
