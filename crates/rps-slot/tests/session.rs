use rps_slot::{
    build_render_buffer, FrameContext, GameEvent, InputEvent, InputQueue, RenderBuffer,
    SlotConfig, SlotSession, SoundEvent, Stage,
};

struct Harness {
    session: SlotSession,
    stage: Stage,
    ctx: FrameContext,
    input: InputQueue,
}

impl Harness {
    fn new(config: SlotConfig) -> Self {
        let mut stage = Stage::new();
        let session = SlotSession::new(config, &mut stage).unwrap();
        Self {
            session,
            stage,
            ctx: FrameContext::new(),
            input: InputQueue::new(),
        }
    }

    fn tick(&mut self) {
        self.session
            .update(1.0, &mut self.input, &mut self.stage, &mut self.ctx)
            .unwrap();
    }

    /// Spin and tick until the result is in, then let the reels settle.
    fn spin(&mut self) {
        self.input.push(InputEvent::Spin);
        self.tick();
        assert!(self.session.is_spinning());
        for _ in 0..5_000 {
            self.tick();
            if !self.session.is_spinning() {
                for _ in 0..20 {
                    self.tick();
                }
                return;
            }
        }
        panic!("spin never finished");
    }
}

#[test]
fn gaffed_win_pays_and_marks_cells() {
    let mut h = Harness::new(SlotConfig::default());
    // strips cycle R→P→S: the player one row ahead beats every house cell
    h.input.push(InputEvent::SetGaffe(vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0]));
    h.spin();

    let result = h.session.last_result().unwrap();
    assert_eq!(result.matches.len(), 15);
    assert_eq!(result.settlement.multiplier, 24);
    assert_eq!(result.settlement.winnings, 120);
    assert_eq!(h.session.balance(), 10_115);

    assert!(h.ctx.sounds.contains(&SoundEvent::WINNER));
    assert!(h.ctx.sounds.contains(&SoundEvent::SPIN_WON));
    assert_eq!(h.ctx.sounds.iter().filter(|s| **s == SoundEvent::REEL_STOP).count(), 10);
    let ev = h.ctx.events_of(GameEvent::SPIN_RESULT).next().unwrap();
    assert_eq!((ev.a, ev.b, ev.c), (120.0, 15.0, 10_110.0));

    for reel in 0..5 {
        for row in 0..3 {
            assert!(h.stage.find(&format!("MachinePlayer_WinBox{reel}_{row}")).is_some());
            assert!(h.stage.find(&format!("MachineHouse_WinBox{reel}_{row}")).is_some());
        }
    }

    let strips = h.session.engine().strips();
    for (i, reel) in h.session.player().reels().iter().enumerate() {
        assert_eq!(reel.target_offset(), 0.0);
        assert_eq!(reel.visible_window(), strips[i].window(1, 3));
    }
    for (i, reel) in h.session.house().reels().iter().enumerate() {
        assert_eq!(reel.visible_window(), strips[i].window(0, 3));
    }

    // 3 symbols per reel plus one box per marked cell
    let mut buffer = RenderBuffer::new();
    build_render_buffer(&h.stage, &mut buffer);
    assert_eq!(buffer.instance_count(), 30 + 30);
}

#[test]
fn reels_report_left_to_right_per_machine() {
    let mut h = Harness::new(SlotConfig::default());
    h.input.push(InputEvent::Spin);
    let mut player = Vec::new();
    let mut house = Vec::new();
    for _ in 0..5_000 {
        h.tick();
        for ev in h.ctx.events_of(GameEvent::REEL_STOPPED) {
            if ev.a == 0.0 {
                player.push(ev.b as usize);
            } else {
                house.push(ev.b as usize);
            }
        }
        h.ctx.clear_frame_data();
        if !h.session.is_spinning() {
            break;
        }
    }
    assert_eq!(player, vec![0, 1, 2, 3, 4]);
    assert_eq!(house, vec![0, 1, 2, 3, 4]);
}

#[test]
fn new_spin_clears_old_win_boxes() {
    let mut h = Harness::new(SlotConfig::default());
    h.input.push(InputEvent::SetGaffe(vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]));
    h.spin();
    assert_eq!(h.session.player().win_box_ids().count(), 15);

    h.spin();
    assert_eq!(h.session.last_result().unwrap().matches.len(), 0);
    assert_eq!(h.session.player().win_box_ids().count(), 0);
    assert!(h.stage.find("MachinePlayer_WinBox0_0").is_none());
    assert_eq!(h.session.balance(), 10_115 - 5);
}

#[test]
fn same_seed_same_session() {
    let mut a = Harness::new(SlotConfig::default());
    let mut b = Harness::new(SlotConfig::default());
    for _ in 0..3 {
        a.spin();
        b.spin();
        assert_eq!(a.session.last_result(), b.session.last_result());
    }
    assert_eq!(a.session.balance(), b.session.balance());
}

#[test]
fn config_from_json_overrides_defaults() {
    let json = r#"{
        "balance_start": 50,
        "bet_min": 10,
        "bet_increment": 10,
        "machine_rows": 2,
        "reelset": [["R","P","S"], ["S","R","P"]],
        "initial_player_stops": [0, 1],
        "initial_house_stops": [2, 0]
    }"#;
    let config = SlotConfig::from_json(json).unwrap();
    let mut h = Harness::new(config);
    assert_eq!(h.session.bet(), 10);
    assert_eq!(h.session.world_size().y, 256.0);

    // reel 0 wins both rows (R,P over S,R), reel 1 is a draw: two matches
    h.input.push(InputEvent::SetGaffe(vec![0, 0, 2, 0]));
    h.spin();
    let result = h.session.last_result().unwrap();
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.settlement.winnings, 0);
    assert_eq!(h.session.balance(), 40);
}
