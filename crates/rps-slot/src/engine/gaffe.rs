use std::collections::VecDeque;

/// Operator-forced stop values, consumed front-first one per reel.
/// Lets a demo or test force an exact spin outcome.
#[derive(Debug, Clone, Default)]
pub struct GaffeQueue {
    stops: VecDeque<usize>,
}

impl GaffeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale.
    pub fn set(&mut self, stops: impl IntoIterator<Item = usize>) {
        self.stops = stops.into_iter().collect();
    }

    /// Take the next forced stop, if any.
    pub fn pop(&mut self) -> Option<usize> {
        self.stops.pop_front()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
