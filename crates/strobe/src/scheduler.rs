use crate::simulation::LineRef;
use crate::vector::LogicPattern;
use std::collections::BinaryHeap;

/// A pending one-shot transition on a line. The value is a pattern so that
/// a transition can touch a subset of the bits (masked write semantics).
#[derive(Debug, Clone)]
pub struct Transition {
    pub time: u64,
    pub line: LineRef,
    pub value: LogicPattern,
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.line == other.line && self.value == other.value
    }
}

impl Eq for Transition {}

impl PartialOrd for Transition {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Transition {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Earlier time has higher priority (BinaryHeap is a Max-Heap)
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.line.cmp(&self.line))
    }
}

pub struct Scheduler {
    pub(crate) time: u64,
    pub(crate) event_queue: BinaryHeap<Transition>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            time: 0,
            event_queue: BinaryHeap::new(),
        }
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.event_queue.peek().map(|e| e.time)
    }

    pub fn push(&mut self, transition: Transition) {
        self.event_queue.push(transition);
    }

    pub fn pop_all_at_next_time(&mut self) -> Option<(u64, Vec<Transition>)> {
        let next_time = self.next_event_time()?;
        let mut transitions = Vec::new();
        while let Some(t) = self.event_queue.peek() {
            if t.time == next_time {
                transitions.push(self.event_queue.pop().unwrap());
            } else {
                break;
            }
        }
        Some((next_time, transitions))
    }
}
