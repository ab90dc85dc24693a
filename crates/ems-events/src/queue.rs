//! `EventQueue` — time-ordered pending-event store.
//!
//! # Ordering
//!
//! Events pop in non-decreasing [`SimTime`] order.  Events with equal times
//! pop in the order they were pushed: every push takes a monotonically
//! increasing sequence number and the heap key is `(time, seq)`.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log N) push and pop.  A 35-day run has roughly 10 K
//! calls in flight at load time plus one free event per dispatched call, so
//! the whole queue stays small.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ems_core::SimTime;

use crate::Event;

struct Entry {
    time:  SimTime,
    seq:   u64,
    event: Event,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time).then(self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue of [`Event`]s keyed by time, FIFO among ties.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue pre-loaded with `events`, in iteration order for ties.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Event>,
    {
        let mut queue = Self::new();
        queue.extend(events);
        queue
    }

    /// Schedule `event` at its own time.
    pub fn push(&mut self, event: impl Into<Event>) {
        let event = event.into();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { time: event.time(), seq, event }));
    }

    /// Schedule every event in `events`.
    pub fn extend<I>(&mut self, events: I)
    where
        I: IntoIterator,
        I::Item: Into<Event>,
    {
        for e in events {
            self.push(e);
        }
    }

    /// Remove and return the earliest event, or `None` if empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(entry)| entry.event)
    }

    /// The time of the earliest pending event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(entry)| entry.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
