use crate::core::rng::Rng;
use crate::engine::gaffe::GaffeQueue;
use crate::error::{Result, SlotError};

/// One stop index per reel: the strip row shown at the top of the window.
/// For a full spin the player's reels come first, then the house's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpinStops(pub Vec<usize>);

impl SpinStops {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Split into (player, house) halves.
    /// An odd-length sequence cannot belong to two equal machines.
    pub fn split_machines(&self) -> Result<(&[usize], &[usize])> {
        if self.0.len() % 2 != 0 {
            return Err(SlotError::UnevenStops { len: self.0.len() });
        }
        Ok(self.0.split_at(self.0.len() / 2))
    }
}

/// Produces one stop per reel, gaffes first, uniform random otherwise.
pub struct StopGenerator {
    rng: Rng,
}

impl StopGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: Rng::new(seed) }
    }

    /// One stop per entry of `strip_lengths`.
    /// Drains one gaffe per reel while any remain; a gaffe beyond the strip
    /// wraps modulo its length.
    pub fn generate(&mut self, gaffe: &mut GaffeQueue, strip_lengths: &[usize]) -> Result<SpinStops> {
        if strip_lengths.is_empty() || strip_lengths.contains(&0) {
            return Err(SlotError::EmptyReelset);
        }
        let stops = strip_lengths
            .iter()
            .map(|&len| match gaffe.pop() {
                Some(forced) => forced % len,
                None => self.rng.next_int(len),
            })
            .collect();
        Ok(SpinStops(stops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_stay_in_strip_range() {
        let mut gen = StopGenerator::new(1);
        let mut gaffe = GaffeQueue::new();
        let lengths = [30, 7, 1, 30, 12];
        for _ in 0..200 {
            let stops = gen.generate(&mut gaffe, &lengths).unwrap();
            assert_eq!(stops.len(), lengths.len());
            for (stop, len) in stops.as_slice().iter().zip(lengths) {
                assert!(*stop < len);
            }
        }
    }

    #[test]
    fn gaffes_take_precedence_then_drain() {
        let mut gen = StopGenerator::new(1);
        let mut gaffe = GaffeQueue::new();
        gaffe.set([3, 7]);
        let stops = gen.generate(&mut gaffe, &[5, 30]).unwrap();
        assert_eq!(stops.0, vec![3 % 5, 7 % 30]);
        assert!(gaffe.is_empty());
    }

    #[test]
    fn gaffe_beyond_strip_wraps() {
        let mut gen = StopGenerator::new(1);
        let mut gaffe = GaffeQueue::new();
        gaffe.set([33]);
        let stops = gen.generate(&mut gaffe, &[30, 30]).unwrap();
        assert_eq!(stops.0[0], 3);
        assert!(stops.0[1] < 30);
    }

    #[test]
    fn zero_length_strip_is_a_fault() {
        let mut gen = StopGenerator::new(1);
        let mut gaffe = GaffeQueue::new();
        assert!(gen.generate(&mut gaffe, &[3, 0]).is_err());
    }

    #[test]
    fn odd_sequence_refuses_to_split() {
        let stops = SpinStops(vec![1, 2, 3]);
        assert!(matches!(stops.split_machines(), Err(SlotError::UnevenStops { len: 3 })));
        let stops = SpinStops(vec![1, 2, 3, 4]);
        assert_eq!(stops.split_machines().unwrap(), (&[1, 2][..], &[3, 4][..]));
    }
}
