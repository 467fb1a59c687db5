//! Recording store and surface shared by the unit tests.

use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use super::asset::{AssetStore, DisplaySurface};
use super::digit::Digit;
use super::error::AssetUnavailable;

/// Handle handed out by [`MockStore`]. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct MockHandle {
    pub id: u32,
    pub digit: Digit,
}

/// Asset store with a load budget, per-digit failure injection and
/// leak / double-release checking.
pub struct MockStore {
    next_id: u32,
    live: Vec<u32, 16>,
    /// Maximum number of assets loaded at once.
    pub budget: usize,
    /// Digits the store refuses to load.
    pub missing: [bool; 10],
    pub acquired: usize,
    pub released: usize,
    /// First digits acquired, in order.
    pub acquire_log: Vec<Digit, 64>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_budget(16)
    }

    pub fn with_budget(budget: usize) -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
            budget,
            missing: [false; 10],
            acquired: 0,
            released: 0,
            acquire_log: Vec::new(),
        }
    }

    pub fn missing_digit(mut self, digit: u8) -> Self {
        self.missing[digit as usize] = true;
        self
    }

    /// Number of assets currently loaded.
    pub fn loaded(&self) -> usize {
        self.live.len()
    }
}

impl AssetStore for MockStore {
    type Handle = MockHandle;

    fn acquire(&mut self, digit: Digit) -> Result<MockHandle, AssetUnavailable> {
        if self.missing[digit.index()] {
            return Err(AssetUnavailable::Missing);
        }
        if self.live.len() >= self.budget {
            return Err(AssetUnavailable::Exhausted);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(id).unwrap();
        // Long-running tests outgrow the log; only the first entries matter.
        let _ = self.acquire_log.push(digit);
        self.acquired += 1;
        Ok(MockHandle { id, digit })
    }

    fn release(&mut self, handle: MockHandle) {
        let pos = self
            .live
            .iter()
            .position(|&id| id == handle.id)
            .expect("released a handle that is not loaded");
        self.live.swap_remove(pos);
        self.released += 1;
    }
}

/// Surface that remembers which handle is attached where.
pub struct MockSurface {
    pub attached: Vec<(u32, Rectangle), 16>,
    pub attaches: usize,
    pub detaches: usize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            attached: Vec::new(),
            attaches: 0,
            detaches: 0,
        }
    }

    pub fn area_of(&self, id: u32) -> Option<Rectangle> {
        self.attached
            .iter()
            .find(|(attached_id, _)| *attached_id == id)
            .map(|(_, area)| *area)
    }
}

impl DisplaySurface<MockHandle> for MockSurface {
    fn attach(&mut self, handle: &MockHandle, area: Rectangle) {
        assert!(
            self.area_of(handle.id).is_none(),
            "handle attached twice"
        );
        self.attached.push((handle.id, area)).unwrap();
        self.attaches += 1;
    }

    fn detach(&mut self, handle: &MockHandle) {
        let pos = self
            .attached
            .iter()
            .position(|(id, _)| *id == handle.id)
            .expect("detached a handle that is not attached");
        self.attached.swap_remove(pos);
        self.detaches += 1;
    }
}
