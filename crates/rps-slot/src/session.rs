use glam::Vec2;
use crate::api::context::FrameContext;
use crate::api::types::{GameEvent, SoundEvent};
use crate::config::SlotConfig;
use crate::display::Display;
use crate::engine::{Settlement, SlotEngine, WinMatch};
use crate::error::Result;
use crate::input::queue::{InputEvent, InputQueue};
use crate::reel::{ReelSpinCoordinator, WinBoxStyle};

pub const PLAYER_MACHINE: &str = "MachinePlayer";
pub const HOUSE_MACHINE: &str = "MachineHouse";
/// Horizontal space between the two machines.
pub const MACHINE_GAP: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetDirection {
    Up,
    Down,
}

/// Everything decided by one finished spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    pub player_stops: Vec<usize>,
    pub house_stops: Vec<usize>,
    pub matches: Vec<WinMatch>,
    pub settlement: Settlement,
}

/// One player's game: the engine, both machines and the current bet.
///
/// Everything advances inside `update`; a spin requested there runs until
/// both machines report every reel stopped, then settles in the same tick.
pub struct SlotSession {
    config: SlotConfig,
    engine: SlotEngine,
    player: ReelSpinCoordinator,
    house: ReelSpinCoordinator,
    bet: u64,
    /// A spin is in flight and not yet settled.
    spin_pending: bool,
    game_over: bool,
    last_result: Option<SpinResult>,
}

impl SlotSession {
    /// Validate `config`, start the engine and stage both machines at their
    /// opening stops.
    pub fn new(config: SlotConfig, display: &mut dyn Display) -> Result<Self> {
        let mut engine = SlotEngine::new(config.clone());
        engine.initialize(config.default_user_id)?;

        let player = ReelSpinCoordinator::new(
            display,
            PLAYER_MACHINE,
            &config,
            &config.initial_player_stops,
            Vec2::ZERO,
        )?;
        let house_origin = Vec2::new(player.bounds().width() + MACHINE_GAP, 0.0);
        let house = ReelSpinCoordinator::new(
            display,
            HOUSE_MACHINE,
            &config,
            &config.initial_house_stops,
            house_origin,
        )?;

        Ok(Self {
            bet: config.bet_min,
            config,
            engine,
            player,
            house,
            spin_pending: false,
            game_over: false,
            last_result: None,
        })
    }

    /// Apply queued input, advance both machines and settle a spin once
    /// every reel has stopped.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut InputQueue,
        display: &mut dyn Display,
        ctx: &mut FrameContext,
    ) -> Result<()> {
        for event in input.drain() {
            self.handle_input(event, display, ctx)?;
        }

        self.player.update(dt, display);
        self.house.update(dt, display);
        for (machine, coordinator) in [(0.0, &mut self.player), (1.0, &mut self.house)] {
            for reel in coordinator.drain_completed() {
                ctx.emit_sound(SoundEvent::REEL_STOP);
                ctx.emit_event(GameEvent::new(GameEvent::REEL_STOPPED, machine, reel as f32, 0.0));
            }
        }

        if self.spin_pending && !self.player.is_spinning() && !self.house.is_spinning() {
            self.settle_spin(display, ctx)?;
        }
        Ok(())
    }

    fn handle_input(&mut self, event: InputEvent, display: &mut dyn Display, ctx: &mut FrameContext) -> Result<()> {
        match event {
            InputEvent::Spin => {
                self.request_spin(display, ctx)?;
            }
            InputEvent::BetIncrease => {
                self.change_bet(BetDirection::Up, ctx);
            }
            InputEvent::BetDecrease => {
                self.change_bet(BetDirection::Down, ctx);
            }
            InputEvent::SetGaffe(stops) => {
                if stops.is_empty() {
                    log::warn!("session: empty gaffe ignored");
                } else {
                    self.engine.set_gaffe(stops);
                }
            }
            InputEvent::Reset => self.reset(display, ctx),
        }
        Ok(())
    }

    /// Start a spin with the current bet. Returns false when the request is
    /// ignored (a spin still running or settling, or the game is over).
    pub fn request_spin(&mut self, display: &mut dyn Display, ctx: &mut FrameContext) -> Result<bool> {
        if self.game_over {
            log::warn!("session: spin ignored, game over");
            return Ok(false);
        }
        if self.spin_pending || !self.player.is_settled() || !self.house.is_settled() {
            log::warn!("session: spin ignored, machines busy");
            return Ok(false);
        }

        self.bet = self.bet.min(self.engine.balance());
        let stops = self.engine.generate_stops()?;
        let (player_stops, house_stops) = stops.split_machines()?;

        self.player.start_spin(display);
        self.house.start_spin(display);
        self.player.end_spin(player_stops)?;
        self.house.end_spin(house_stops)?;

        self.spin_pending = true;
        ctx.emit_sound(SoundEvent::SPIN_LOOP);
        log::info!(
            "session: spin, bet {}, player {:?} vs house {:?}",
            self.bet,
            player_stops,
            house_stops
        );
        Ok(true)
    }

    fn settle_spin(&mut self, display: &mut dyn Display, ctx: &mut FrameContext) -> Result<()> {
        self.spin_pending = false;
        let matches = self.engine.win_matches()?.to_vec();
        let settlement = self.engine.settle(self.bet)?;

        self.bet = settlement.bet.min(settlement.balance);
        self.player.show_win_boxes(&matches, WinBoxStyle::WINNER, display);
        self.house.show_win_boxes(&matches, WinBoxStyle::LOSER, display);

        ctx.emit_sound(SoundEvent::SPIN_LOOP_STOP);
        if settlement.winnings > 0 {
            ctx.emit_sound(SoundEvent::WINNER);
            ctx.emit_sound(SoundEvent::SPIN_WON);
        } else {
            ctx.emit_sound(SoundEvent::SPIN_LOST);
        }
        ctx.emit_event(GameEvent::new(
            GameEvent::SPIN_RESULT,
            settlement.winnings as f32,
            matches.len() as f32,
            self.projected_balance() as f32,
        ));

        if settlement.balance == 0 && self.bet == 0 {
            self.game_over = true;
            ctx.emit_event(GameEvent::new(GameEvent::GAME_OVER, 0.0, 0.0, 0.0));
            log::info!("session: game over");
        }

        let (player_stops, house_stops) = match self.engine.last_stops() {
            Some(stops) => {
                let (p, h) = stops.split_machines()?;
                (p.to_vec(), h.to_vec())
            }
            None => (Vec::new(), Vec::new()),
        };
        self.last_result = Some(SpinResult {
            player_stops,
            house_stops,
            matches,
            settlement,
        });
        Ok(())
    }

    /// Step the bet by one increment. Raising needs the new bet within
    /// `bet_max` and covered by the balance; lowering stops at `bet_min`.
    /// Returns the bet and the balance left once it is placed.
    pub fn change_bet(&mut self, direction: BetDirection, ctx: &mut FrameContext) -> (u64, u64) {
        if self.spin_pending || self.game_over {
            log::warn!("session: bet change ignored");
            return (self.bet, self.projected_balance());
        }

        let balance = self.engine.balance();
        match direction {
            BetDirection::Up => {
                let bet = self.bet.saturating_add(self.config.bet_increment);
                if bet <= self.config.bet_max && bet <= balance {
                    self.bet = bet;
                }
            }
            BetDirection::Down => {
                if let Some(bet) = self.bet.checked_sub(self.config.bet_increment) {
                    if bet >= self.config.bet_min {
                        self.bet = bet;
                    }
                }
            }
        }

        let projected = self.projected_balance();
        ctx.emit_sound(SoundEvent::CLICK);
        ctx.emit_event(GameEvent::new(GameEvent::BET_CHANGED, self.bet as f32, projected as f32, 0.0));
        (self.bet, projected)
    }

    /// Back to the opening balance and minimum bet.
    pub fn reset(&mut self, display: &mut dyn Display, ctx: &mut FrameContext) {
        if self.spin_pending {
            log::warn!("session: reset ignored while spinning");
            return;
        }
        self.engine.reset();
        self.bet = self.config.bet_min;
        self.game_over = false;
        self.last_result = None;
        self.player.clear_win_boxes(display);
        self.house.clear_win_boxes(display);
        ctx.emit_event(GameEvent::new(
            GameEvent::BET_CHANGED,
            self.bet as f32,
            self.projected_balance() as f32,
            0.0,
        ));
        log::info!("session: reset, balance {}", self.engine.balance());
    }

    /// Remove both machines from the display.
    pub fn dispose(&mut self, display: &mut dyn Display) {
        self.player.dispose(display);
        self.house.dispose(display);
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn balance(&self) -> u64 {
        self.engine.balance()
    }

    /// Balance left after the current bet is taken.
    pub fn projected_balance(&self) -> u64 {
        self.engine.balance().saturating_sub(self.bet)
    }

    /// True from a spin request until the spin settles.
    pub fn is_spinning(&self) -> bool {
        self.spin_pending || self.player.is_spinning() || self.house.is_spinning()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn engine(&self) -> &SlotEngine {
        &self.engine
    }

    pub fn player(&self) -> &ReelSpinCoordinator {
        &self.player
    }

    pub fn house(&self) -> &ReelSpinCoordinator {
        &self.house
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Size of the area covered by both machines.
    pub fn world_size(&self) -> Vec2 {
        let house = self.house.bounds();
        Vec2::new(house.x() + house.width(), house.height().max(self.player.bounds().height()))
    }
}
