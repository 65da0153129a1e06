use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::engine::combinations::CombinationTable;
use crate::error::{Result, SlotError};
use crate::reel::kinematics::ReelPhysics;

/// Game configuration: reel strips, symbols, payout rules and bet bounds.
/// Loaded from JSON at startup; fields left out take the stock values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Upper bound on update ticks per second.
    pub max_fps: u32,
    pub balance_start: u64,
    pub bet_min: u64,
    pub bet_max: u64,
    pub bet_increment: u64,
    pub default_user_id: u32,
    /// Rows visible in each machine window.
    pub machine_rows: usize,
    /// One symbol strip per reel. Both machines use the same strips.
    pub reelset: Vec<Vec<String>>,
    /// Symbol code → sprite asset path.
    pub symbol_assets: HashMap<String, String>,
    /// Symbol code → the symbol it beats.
    pub combinations: HashMap<String, String>,
    pub initial_player_stops: Vec<usize>,
    pub initial_house_stops: Vec<usize>,
    /// Matches needed before anything pays.
    pub win_match_min: usize,
    /// Multiplier paid at exactly `win_match_min` matches.
    pub bet_multiplier: u64,
    /// Added to the multiplier for each match above `win_match_min`.
    pub bet_multiplier_inc: u64,
    /// Side of one square symbol cell in world units.
    pub symbol_size: f32,
    pub physics: ReelPhysics,
    /// Seed for stop generation and bounce jitter.
    pub seed: u64,
}

const SPRITES: &str = "./game/Sprites/";

fn strip(codes: &str) -> Vec<String> {
    codes.chars().map(|c| c.to_string()).collect()
}

impl Default for SlotConfig {
    fn default() -> Self {
        let symbol_assets = [("R", "Rock"), ("P", "Paper"), ("S", "Scissors")]
            .into_iter()
            .map(|(code, name)| (code.to_string(), format!("{SPRITES}{name}.png")))
            .collect();
        let combinations = [("R", "S"), ("P", "R"), ("S", "P")]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        Self {
            max_fps: 60,
            balance_start: 10_000,
            bet_min: 5,
            bet_max: 1000,
            bet_increment: 5,
            default_user_id: 0,
            machine_rows: 3,
            reelset: vec![
                strip("RPSRPSRPSRRPSRPSRPSRRPSRPSRPSR"),
                strip("PSRPSRPSRPPSRPSRPSRPPSRPSRPSRP"),
                strip("SRPSRPSRPSSRPSRPSRPSSRPSRPSRPS"),
                strip("PSRPSRPSRPPSRPSRPSRPPSRPSRPSRP"),
                strip("RPSRPSRPSRRPSRPSRPSRRPSRPSRPSR"),
            ],
            symbol_assets,
            combinations,
            initial_player_stops: vec![12, 17, 18, 20, 6],
            initial_house_stops: vec![8, 10, 12, 23, 15],
            win_match_min: 4,
            bet_multiplier: 2,
            bet_multiplier_inc: 2,
            symbol_size: 128.0,
            physics: ReelPhysics::default(),
            seed: 0x5eed_0f_5107,
        }
    }
}

impl SlotConfig {
    /// Parse a config from a JSON string. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of reels in one machine.
    pub fn reel_count(&self) -> usize {
        self.reelset.len()
    }

    /// Reject configuration faults that would leave the game unplayable.
    pub fn validate(&self) -> Result<()> {
        if self.reelset.is_empty() {
            return Err(SlotError::EmptyReelset);
        }
        if self.machine_rows == 0 {
            return Err(SlotError::ZeroRows);
        }
        if self.bet_min == 0 || self.bet_increment == 0 || self.bet_min > self.bet_max {
            return Err(SlotError::BetBounds {
                min: self.bet_min,
                max: self.bet_max,
                increment: self.bet_increment,
            });
        }
        if !self.symbol_size.is_finite() || self.symbol_size <= 0.0 {
            return Err(SlotError::SymbolSize {
                size: self.symbol_size,
            });
        }
        self.physics.validate()?;

        let mut symbols = HashSet::new();
        for (reel, codes) in self.reelset.iter().enumerate() {
            if codes.len() <= self.machine_rows {
                return Err(SlotError::StripTooShort {
                    reel,
                    len: codes.len(),
                    rows: self.machine_rows,
                });
            }
            for code in codes {
                if !self.symbol_assets.contains_key(code) {
                    return Err(SlotError::MissingAsset {
                        reel,
                        symbol: code.clone(),
                    });
                }
                symbols.insert(code.as_str());
            }
        }

        for (which, stops) in [
            ("player", &self.initial_player_stops),
            ("house", &self.initial_house_stops),
        ] {
            if stops.len() != self.reel_count() {
                return Err(SlotError::InitialStops {
                    which,
                    expected: self.reel_count(),
                    got: stops.len(),
                });
            }
        }

        for (winner, loser) in &self.combinations {
            for symbol in [winner, loser] {
                if !symbols.contains(symbol.as_str()) {
                    return Err(SlotError::UnknownSymbol {
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        CombinationTable::new(self.combinations.clone()).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SlotConfig::default();
        config.validate().unwrap();
        assert_eq!(config.reel_count(), 5);
        assert!(config.reelset.iter().all(|s| s.len() == 30));
    }

    #[test]
    fn parse_partial_json_keeps_defaults() {
        let json = r#"{
            "machine_rows": 2,
            "reelset": [["R", "P", "S"], ["S", "R", "P"]],
            "initial_player_stops": [0, 1],
            "initial_house_stops": [2, 0],
            "seed": 7
        }"#;
        let config = SlotConfig::from_json(json).unwrap();
        assert_eq!(config.machine_rows, 2);
        assert_eq!(config.reel_count(), 2);
        assert_eq!(config.bet_min, 5);
        assert_eq!(config.combinations["R"], "S");
        assert_eq!(config.physics, ReelPhysics::default());
        config.validate().unwrap();
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SlotConfig::from_json("{ \"reelset\": 3 }").unwrap_err();
        assert!(matches!(err, SlotError::Parse(_)));
    }

    #[test]
    fn strip_shorter_than_window_rejected() {
        let config = SlotConfig {
            reelset: vec![strip("RP")],
            initial_player_stops: vec![0],
            initial_house_stops: vec![0],
            ..SlotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SlotError::StripTooShort { reel: 0, len: 2, rows: 3 })
        ));
    }

    #[test]
    fn strip_must_be_longer_than_window() {
        let config = SlotConfig {
            reelset: vec![strip("RPS")],
            initial_player_stops: vec![0],
            initial_house_stops: vec![0],
            ..SlotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SlotError::StripTooShort { reel: 0, len: 3, rows: 3 })
        ));

        let config = SlotConfig {
            reelset: vec![strip("RPSR")],
            ..config
        };
        config.validate().unwrap();
    }

    #[test]
    fn bad_symbol_size_rejected() {
        for size in [0.0, -128.0, f32::NAN, f32::INFINITY] {
            let config = SlotConfig {
                symbol_size: size,
                ..SlotConfig::default()
            };
            assert!(matches!(config.validate(), Err(SlotError::SymbolSize { .. })));
        }
    }

    #[test]
    fn bad_physics_rejected() {
        let cases: [(&str, fn(&mut ReelPhysics)); 5] = [
            ("velocity_start", |p| p.velocity_start = 0.0),
            ("velocity_start", |p| p.velocity_start = -0.1),
            ("velocity_max", |p| p.velocity_max = 0.001),
            ("velocity_increment", |p| p.velocity_increment = -0.01),
            ("bounce_max", |p| p.bounce_max = -0.5),
        ];
        for (field, tweak) in cases {
            let mut config = SlotConfig::default();
            tweak(&mut config.physics);
            match config.validate() {
                Err(SlotError::Physics { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{field}: expected physics error, got {:?}", other),
            }
        }
    }

    #[test]
    fn symbol_without_asset_rejected() {
        let mut config = SlotConfig::default();
        config.reelset[2][4] = "X".to_string();
        assert!(matches!(
            config.validate(),
            Err(SlotError::MissingAsset { reel: 2, .. })
        ));
    }

    #[test]
    fn stop_count_must_match_reels() {
        let mut config = SlotConfig::default();
        config.initial_house_stops.pop();
        assert!(matches!(
            config.validate(),
            Err(SlotError::InitialStops { which: "house", expected: 5, got: 4 })
        ));
    }

    #[test]
    fn combination_with_unknown_symbol_rejected() {
        let mut config = SlotConfig::default();
        config.combinations.insert("R".into(), "Lizard".into());
        assert!(matches!(config.validate(), Err(SlotError::UnknownSymbol { .. })));
    }

    #[test]
    fn bad_bet_bounds_rejected() {
        let config = SlotConfig {
            bet_min: 50,
            bet_max: 10,
            ..SlotConfig::default()
        };
        assert!(matches!(config.validate(), Err(SlotError::BetBounds { .. })));
    }
}
