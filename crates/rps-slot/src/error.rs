//! Error type for configuration faults and engine misuse.
//!
//! Guarded no-ops (ending a reel twice, starting a reel mid-stop) and
//! references to visuals that no longer exist are not errors and never
//! surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// Configuration JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reelset is empty")]
    EmptyReelset,

    #[error("machine must show at least one row")]
    ZeroRows,

    /// The doubled strip must outrun the window plus one wrap margin.
    #[error("reel {reel} strip has {len} symbols, needs more than {rows}")]
    StripTooShort { reel: usize, len: usize, rows: usize },

    #[error("symbol {symbol:?} on reel {reel} has no asset")]
    MissingAsset { reel: usize, symbol: String },

    #[error("{which} stops: expected {expected}, got {got}")]
    InitialStops {
        which: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("combination entry names unknown symbol {symbol:?}")]
    UnknownSymbol { symbol: String },

    #[error("symbol {symbol:?} beats itself")]
    SelfBeat { symbol: String },

    #[error("symbols {a:?} and {b:?} beat each other")]
    MutualBeat { a: String, b: String },

    #[error("three-symbol combination table must form a single cycle")]
    NotACycle,

    #[error("symbol size {size} must be a positive finite number")]
    SymbolSize { size: f32 },

    #[error("reel physics {field} = {value} is out of range")]
    Physics { field: &'static str, value: f32 },

    #[error("bet bounds invalid: min {min}, max {max}, increment {increment}")]
    BetBounds { min: u64, max: u64, increment: u64 },

    /// The engine was used before `initialize` succeeded.
    #[error("slot engine not initialized")]
    NotInitialized,

    #[error("expected {expected} stops, got {got}")]
    StopCountMismatch { expected: usize, got: usize },

    /// Win evaluation needs an even stop sequence (player half, house half).
    #[error("stop sequence of length {len} cannot be split between two machines")]
    UnevenStops { len: usize },
}

pub type Result<T> = std::result::Result<T, SlotError>;
