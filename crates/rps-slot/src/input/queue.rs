/// Player and operator commands the session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Spin both machines with the current bet.
    Spin,
    /// Raise the bet by one increment.
    BetIncrease,
    /// Lower the bet by one increment.
    BetDecrease,
    /// Force the next stops, player reels first.
    SetGaffe(Vec<usize>),
    /// Start over with the opening balance.
    Reset,
}

/// A queue of input events.
/// The host pushes events as they happen; the session drains them once per
/// update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::BetIncrease);
        q.push(InputEvent::Spin);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events, vec![InputEvent::BetIncrease, InputEvent::Spin]);
        assert!(q.is_empty());
    }

    #[test]
    fn gaffe_carries_stops() {
        let mut q = InputQueue::new();
        q.push(InputEvent::SetGaffe(vec![3, 7]));
        assert_eq!(q.iter().next(), Some(&InputEvent::SetGaffe(vec![3, 7])));
        match q.drain().pop() {
            Some(InputEvent::SetGaffe(stops)) => assert_eq!(stops, vec![3, 7]),
            other => panic!("Expected SetGaffe, got {:?}", other),
        }
    }
}
