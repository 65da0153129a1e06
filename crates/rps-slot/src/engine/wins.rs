use crate::engine::combinations::CombinationTable;
use crate::engine::stops::SpinStops;
use crate::engine::strip::ReelStrip;
use crate::error::{Result, SlotError};

/// One cell where the player's symbol beats the house's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WinMatch {
    pub reel: usize,
    pub row: usize,
}

impl WinMatch {
    pub fn new(reel: usize, row: usize) -> Self {
        Self { reel, row }
    }
}

/// Compares player and house rows reel by reel.
/// There are no paylines: every visible row of every reel is its own bout.
pub struct WinEvaluator<'a> {
    combinations: &'a CombinationTable,
    rows: usize,
}

impl<'a> WinEvaluator<'a> {
    pub fn new(combinations: &'a CombinationTable, rows: usize) -> Self {
        Self { combinations, rows }
    }

    /// Winning cells for a full spin. `stops` holds the player's reels then
    /// the house's; reel `i` of both machines reads `strips[i]`.
    pub fn evaluate(&self, stops: &SpinStops, strips: &[ReelStrip]) -> Result<Vec<WinMatch>> {
        let (player, house) = stops.split_machines()?;
        if player.len() > strips.len() {
            return Err(SlotError::StopCountMismatch {
                expected: strips.len() * 2,
                got: stops.len(),
            });
        }

        let mut matches = Vec::new();
        for (reel, (&check_stop, &vs_stop)) in player.iter().zip(house).enumerate() {
            let strip = &strips[reel];
            for row in 0..self.rows {
                let check = strip.symbol_at(check_stop + row);
                let vs = strip.symbol_at(vs_stop + row);
                if self.combinations.beats(check, vs) {
                    matches.push(WinMatch::new(reel, row));
                }
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> CombinationTable {
        CombinationTable::new(
            [("R", "S"), ("P", "R"), ("S", "P")]
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        )
    }

    fn strip(s: &str) -> ReelStrip {
        ReelStrip::new(&s.chars().map(|c| c.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn rows_are_judged_independently() {
        let table = rps();
        let eval = WinEvaluator::new(&table, 3);
        let strips = vec![strip("RPS")];
        // player R,P,S vs house S,R,P: all three rows win
        let all = eval.evaluate(&SpinStops(vec![0, 2]), &strips).unwrap();
        assert_eq!(all, vec![WinMatch::new(0, 0), WinMatch::new(0, 1), WinMatch::new(0, 2)]);
        // player P,S,R vs house R,P,S: all three also win
        let also = eval.evaluate(&SpinStops(vec![1, 0]), &strips).unwrap();
        assert_eq!(also.len(), 3);
        // same stop on both sides: every row is a draw
        let none = eval.evaluate(&SpinStops(vec![1, 1]), &strips).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn partial_reel_wins() {
        let table = rps();
        let eval = WinEvaluator::new(&table, 2);
        let strips = vec![strip("RRS"), strip("PSR")];
        // reel 0: player R,R vs house S,R -> row 0 wins, row 1 draws
        // reel 1: player P,S vs house P,S -> draws
        let wins = eval.evaluate(&SpinStops(vec![0, 0, 2, 0]), &strips).unwrap();
        assert_eq!(wins, vec![WinMatch::new(0, 0)]);
        assert!(wins.iter().all(|m| m.row < 2));
    }

    #[test]
    fn odd_stop_count_rejected() {
        let table = rps();
        let eval = WinEvaluator::new(&table, 3);
        let strips = vec![strip("RPS")];
        assert!(matches!(
            eval.evaluate(&SpinStops(vec![0, 1, 2]), &strips),
            Err(SlotError::UnevenStops { len: 3 })
        ));
    }

    #[test]
    fn more_reels_than_strips_rejected() {
        let table = rps();
        let eval = WinEvaluator::new(&table, 3);
        let strips = vec![strip("RPS")];
        assert!(eval.evaluate(&SpinStops(vec![0, 1, 2, 0]), &strips).is_err());
    }
}
