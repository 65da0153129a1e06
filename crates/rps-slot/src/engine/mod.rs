//! Spin Outcome Engine: stop generation, cross-machine win evaluation and
//! payout.
//!
//! ```ignore
//! let mut engine = SlotEngine::new(SlotConfig::default());
//! engine.initialize(0)?;
//! engine.set_gaffe(vec![3, 7]);
//! let stops = engine.generate_stops()?;      // player reels, then house reels
//! let wins = engine.win_matches()?.len();
//! let settlement = engine.settle(5)?;        // debits the bet, pays winnings
//! ```

pub mod combinations;
pub mod gaffe;
pub mod payout;
pub mod stops;
pub mod strip;
pub mod wins;

pub use combinations::CombinationTable;
pub use gaffe::GaffeQueue;
pub use payout::{PayoutTable, Settlement};
pub use stops::{SpinStops, StopGenerator};
pub use strip::ReelStrip;
pub use wins::{WinEvaluator, WinMatch};

use crate::config::SlotConfig;
use crate::error::{Result, SlotError};

pub struct SlotEngine {
    config: SlotConfig,
    user_id: u32,
    balance: u64,
    gaffe: GaffeQueue,
    /// One strip per reel of a machine; both machines share them.
    strips: Vec<ReelStrip>,
    combinations: CombinationTable,
    payout: PayoutTable,
    generator: StopGenerator,
    /// Last generated sequence, kept until the next generation.
    generated: Option<SpinStops>,
    /// Matches for `generated`, computed on first request.
    win_matches: Option<Vec<WinMatch>>,
    initialized: bool,
}

impl SlotEngine {
    pub fn new(config: SlotConfig) -> Self {
        let generator = StopGenerator::new(config.seed);
        let payout = PayoutTable {
            win_match_min: config.win_match_min,
            base_multiplier: config.bet_multiplier,
            multiplier_increment: config.bet_multiplier_inc,
        };
        Self {
            config,
            user_id: 0,
            balance: 0,
            gaffe: GaffeQueue::new(),
            strips: Vec::new(),
            combinations: CombinationTable::default(),
            payout,
            generator,
            generated: None,
            win_matches: None,
            initialized: false,
        }
    }

    /// Validate the configuration and load strips, rules and the starting
    /// balance. A configuration fault leaves the engine unusable.
    pub fn initialize(&mut self, user_id: u32) -> Result<()> {
        if let Err(e) = self.config.validate() {
            log::error!("slot engine: configuration rejected: {}", e);
            return Err(e);
        }
        self.user_id = user_id;
        self.balance = self.config.balance_start;
        self.strips = self.config.reelset.iter().map(|codes| ReelStrip::new(codes)).collect();
        self.combinations = CombinationTable::new(self.config.combinations.clone());
        self.generated = None;
        self.win_matches = None;
        self.initialized = true;
        log::info!(
            "slot engine: user {} initialized with {} reels, balance {}",
            user_id,
            self.strips.len(),
            self.balance
        );
        Ok(())
    }

    /// Restore the starting balance.
    pub fn reset(&mut self) {
        self.balance = self.config.balance_start;
    }

    /// Replace the forced-stop queue. Values are consumed one per reel,
    /// player reels first, over as many spins as they last.
    pub fn set_gaffe(&mut self, stops: Vec<usize>) {
        log::info!("slot engine: gaffe set to {:?}", stops);
        self.gaffe.set(stops);
    }

    /// Generate stops for both machines and remember them for evaluation.
    pub fn generate_stops(&mut self) -> Result<SpinStops> {
        if !self.initialized {
            return Err(SlotError::NotInitialized);
        }
        let lengths: Vec<usize> = self
            .strips
            .iter()
            .chain(self.strips.iter())
            .map(ReelStrip::len)
            .collect();
        let stops = self.generator.generate(&mut self.gaffe, &lengths)?;
        log::info!("slot engine: generated stops {:?}", stops.as_slice());
        self.generated = Some(stops.clone());
        self.win_matches = None;
        Ok(stops)
    }

    /// Winning cells for the last generated stops. Empty before the first
    /// generation; cached until the next one.
    pub fn win_matches(&mut self) -> Result<&[WinMatch]> {
        let Some(stops) = &self.generated else {
            return Ok(&[]);
        };
        if self.win_matches.is_none() {
            let matches = WinEvaluator::new(&self.combinations, self.config.machine_rows)
                .evaluate(stops, &self.strips)?;
            self.win_matches = Some(matches);
        }
        Ok(self.win_matches.as_deref().unwrap_or_default())
    }

    /// Settle the current spin: take `bet` (at most the balance) and pay
    /// out according to the match count.
    pub fn settle(&mut self, bet: u64) -> Result<Settlement> {
        let match_count = self.win_matches()?.len();
        let settlement = self.payout.settle(self.balance, match_count, bet);
        self.balance = settlement.balance;
        log::info!(
            "slot engine: {} matches, bet {}, won {}, balance {}",
            match_count,
            settlement.bet,
            settlement.winnings,
            settlement.balance
        );
        Ok(settlement)
    }

    /// Winnings alone for `bet` at the current match count.
    pub fn winnings(&mut self, bet: u64) -> Result<u64> {
        Ok(self.settle(bet)?.winnings)
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn last_stops(&self) -> Option<&SpinStops> {
        self.generated.as_ref()
    }

    pub fn strips(&self) -> &[ReelStrip] {
        &self.strips
    }

    pub fn gaffe(&self) -> &GaffeQueue {
        &self.gaffe
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }
}
