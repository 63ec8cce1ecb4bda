use std::fmt;

use tracing::{debug, trace};

use crate::error::{QueueError, Result};

/// Number of slots in the reference queue.
pub const DEFAULT_CAPACITY: usize = 8;

/// A fixed-capacity FIFO of integers backed by a circular array.
///
/// Only the `len()` slots starting at the front index (wrapping modulo
/// `CAPACITY`) hold logical content. Everything else is stale and is never
/// read back, so removals only move the front index and shrink the count.
///
/// ```
/// use ringq::RingQueue;
///
/// let mut queue: RingQueue = RingQueue::new();
/// queue.insert(10).unwrap();
/// queue.insert(20).unwrap();
/// queue.insert(30).unwrap();
/// assert_eq!(queue.status_text(), "Queue status: [ 10, 20, 30 ]");
///
/// queue.remove_range(2).unwrap();
/// assert_eq!(queue.status_text(), "Queue status: [ 30 ]");
/// ```
#[derive(Clone)]
pub struct RingQueue<const CAPACITY: usize = DEFAULT_CAPACITY> {
    storage: [i32; CAPACITY],
    front: usize,
    count: usize,
}

impl<const CAPACITY: usize> RingQueue<CAPACITY> {
    const HAS_SLOTS: () = assert!(CAPACITY > 0, "a ring queue needs at least one slot");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_SLOTS;

        RingQueue {
            storage: [0; CAPACITY],
            front: 0,
            count: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    /// Physical slot of the element `offset` places behind the front.
    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % CAPACITY
    }

    fn back_slot(&self) -> Option<usize> {
        self.count.checked_sub(1).map(|last| self.slot(last))
    }

    /// Appends `value` at the back.
    ///
    /// Fails with [`QueueError::Full`] when every slot is occupied.
    pub fn insert(&mut self, value: i16) -> Result<()> {
        if self.is_full() {
            let err = QueueError::Full { capacity: CAPACITY };
            debug!(value, %err, "insert rejected");
            return Err(err);
        }

        let slot = self.slot(self.count);
        self.storage[slot] = i32::from(value);
        self.count += 1;
        trace!(value, slot, front = self.front, count = self.count, "inserted");
        Ok(())
    }

    /// Removes the oldest element and returns it.
    pub fn remove_front(&mut self) -> Result<i32> {
        let Some(value) = self.front() else {
            debug!(err = %QueueError::Empty, "remove_front rejected");
            return Err(QueueError::Empty);
        };

        self.advance(1);
        Ok(value)
    }

    /// Drops every element from the front up to and including the 1-based
    /// logical `position`, returning how many were removed.
    ///
    /// `remove_range(1)` behaves like [`remove_front`](Self::remove_front) and
    /// `remove_range(len)` empties the queue. This trims from the front; it
    /// does not remove a single interior element.
    pub fn remove_range(&mut self, position: i16) -> Result<usize> {
        if self.is_empty() {
            debug!(position, err = %QueueError::Empty, "remove_range rejected");
            return Err(QueueError::Empty);
        }

        let removed = usize::try_from(position)
            .ok()
            .filter(|removed| (1..=self.count).contains(removed));
        let Some(removed) = removed else {
            let err = QueueError::InvalidPosition {
                position,
                len: self.count,
            };
            debug!(%err, "remove_range rejected");
            return Err(err);
        };

        self.advance(removed);
        Ok(removed)
    }

    /// Moves the front forward by `n` logical elements. Callers guarantee
    /// `n <= count`.
    fn advance(&mut self, n: usize) {
        for offset in 0..n {
            let slot = self.slot(offset);
            self.storage[slot] = 0;
        }

        self.front = self.slot(n);
        self.count -= n;
        trace!(removed = n, front = self.front, count = self.count, "advanced front");
    }

    /// The oldest element, if any.
    pub fn front(&self) -> Option<i32> {
        (!self.is_empty()).then(|| self.storage[self.front])
    }

    /// The newest element, if any.
    pub fn back(&self) -> Option<i32> {
        self.back_slot().map(|slot| self.storage[slot])
    }

    /// Logical elements in front-to-back order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        (0..self.count).map(move |offset| self.storage[self.slot(offset)])
    }

    /// A view of the current contents that renders as the status line.
    pub fn status(&self) -> Status<'_, CAPACITY> {
        Status {
            queue: self,
            note: "",
        }
    }

    /// Renders `Queue status: [ .. ]` from the current state.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Renders the status line followed by `note` on its own line when the
    /// note is non-empty.
    pub fn refresh_status(&self, note: &str) -> String {
        self.status().with_note(note).to_string()
    }

    /// Raw front and back indexes, for diagnostics only.
    pub fn debug_snapshot(&self) -> Result<DebugSnapshot> {
        match self.back_slot() {
            Some(back) => Ok(DebugSnapshot {
                front: self.front,
                back,
            }),
            None => {
                debug!(err = %QueueError::Empty, "debug_snapshot rejected");
                Err(QueueError::Empty)
            }
        }
    }
}

impl<const CAPACITY: usize> Default for RingQueue<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> fmt::Debug for RingQueue<CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a, const C: usize>(&'a RingQueue<C>);

        impl<const C: usize> fmt::Debug for Elements<'_, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("RingQueue")
            .field("capacity", &CAPACITY)
            .field("front", &self.front)
            .field("len", &self.count)
            .field("elements", &Elements(self))
            .finish()
    }
}

/// Read-only rendering of a queue's contents.
///
/// This is a diagnostic view computed from the queue every time it is
/// formatted; it is never parsed back.
#[derive(Clone, Copy)]
pub struct Status<'a, const CAPACITY: usize> {
    queue: &'a RingQueue<CAPACITY>,
    note: &'a str,
}

impl<'a, const CAPACITY: usize> Status<'a, CAPACITY> {
    /// Appends `note` on the line after the contents. An empty note adds nothing.
    pub fn with_note(self, note: &'a str) -> Self {
        Status { note, ..self }
    }
}

impl<const CAPACITY: usize> fmt::Display for Status<'_, CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue status: [ ")?;
        if self.queue.is_empty() {
            f.write_str("empty")?;
        } else {
            for (i, value) in self.queue.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
        }
        f.write_str(" ]")?;

        if !self.note.is_empty() {
            write!(f, "\n{}", self.note)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSnapshot {
    pub front: usize,
    pub back: usize,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NOTE: These are the actual indexes.\nfront: {}\nfinal: {}",
            self.front, self.back
        )
    }
}
