//! Throw intake and turn/game/series advancement

use serde::{Deserialize, Serialize};

use super::event::{
    Callout, EngineEvent, GameComplete, RackReset, ResetDirective, ThrowEvent, TurnAdvance,
};
use super::snapshot::EngineSnapshot;
use super::state::{EnginePhase, EngineState, Transition};
use crate::consts::*;
use crate::error::{EngineError, EngineResult};
use crate::score::{Player, RackState, ThrowOutcome};
use crate::settings::Settings;
use crate::summary::SeriesSummary;

/// Result of one settled throw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowReport {
    pub throw: ThrowEvent,
    pub directive: ResetDirective,
    /// Every event in emission order (starts with the throw and reset)
    pub events: Vec<EngineEvent>,
}

impl ThrowReport {
    pub fn turn_advance(&self) -> Option<&TurnAdvance> {
        self.events.iter().find_map(|e| match e {
            EngineEvent::TurnAdvance(advance) => Some(advance),
            _ => None,
        })
    }

    pub fn game_complete(&self) -> Option<&GameComplete> {
        self.events.iter().find_map(|e| match e {
            EngineEvent::GameComplete(game) => Some(game),
            _ => None,
        })
    }

    pub fn series_summary(&self) -> Option<&SeriesSummary> {
        self.events.iter().find_map(|e| match e {
            EngineEvent::SeriesComplete(summary) => Some(summary),
            _ => None,
        })
    }
}

/// Scoring and turn engine for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEngine {
    state: EngineState,
}

impl TurnEngine {
    pub fn new(settings: &Settings) -> Self {
        let state = EngineState::new(settings);
        log::info!(
            "New {} series: {} player(s), {} game(s)",
            settings.mode.as_str(),
            state.players.len(),
            state.max_games
        );
        Self { state }
    }

    /// Resume from a saved state
    pub fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn into_state(self) -> EngineState {
        self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn game_number(&self) -> u32 {
        self.state.game_number
    }

    /// A throw is rolling and has not been reported yet
    pub fn is_busy(&self) -> bool {
        self.state.phase == EnginePhase::ThrowInFlight
    }

    pub fn is_series_complete(&self) -> bool {
        self.state.is_series_complete()
    }

    /// Mark a throw as in flight. Rejected while another throw is outstanding.
    pub fn launch(&mut self) -> EngineResult<()> {
        match self.state.phase {
            EnginePhase::SeriesComplete => return Err(EngineError::SeriesComplete),
            EnginePhase::ThrowInFlight => return Err(EngineError::ThrowInFlight),
            EnginePhase::AwaitingThrow => {}
        }
        assert!(
            !self.state.player().is_turn_over(),
            "current player has already finished the game"
        );

        self.state.phase = EnginePhase::ThrowInFlight;
        log::debug!(
            "{} launches: frame {}, ball {}",
            self.state.player().name,
            self.state.player().current_frame() + 1,
            self.state.player().current_ball() + 1
        );
        Ok(())
    }

    /// Record the settled pin count for the throw in flight.
    ///
    /// An invalid count is rejected with no state change; the throw stays in
    /// flight so a corrected count can be reported.
    pub fn on_throw_settled(&mut self, pins: u8) -> EngineResult<ThrowReport> {
        match self.state.phase {
            EnginePhase::SeriesComplete => return Err(EngineError::SeriesComplete),
            EnginePhase::AwaitingThrow => return Err(EngineError::NoThrowInFlight),
            EnginePhase::ThrowInFlight => {}
        }

        let player_index = self.state.current_player;
        let outcome = match self.state.player_mut().record_throw(pins) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("Rejected throw of {} pins: {}", pins, err);
                return Err(err.into());
            }
        };

        self.state.phase = EnginePhase::AwaitingThrow;
        self.state.last_transition = Transition::None;

        let throw = self.throw_event(player_index, &outcome);
        log::debug!(
            "{} frame {} ball {}: {} pins (running {})",
            throw.player_name,
            throw.frame,
            throw.ball,
            pins,
            self.state.player().running_score()
        );
        if let Some(message) = throw.callout.message() {
            log::info!("{}: {}", throw.player_name, message);
        }

        let directive = self.reset_directive(&outcome);
        let mut events = vec![
            EngineEvent::Throw(throw.clone()),
            EngineEvent::Reset(directive),
        ];

        if outcome.turn_over {
            self.finish_turn(&mut events);
        }

        Ok(ThrowReport {
            throw,
            directive,
            events,
        })
    }

    /// Launch and settle in one step (front ends without their own busy handling)
    pub fn throw_ball(&mut self, pins: u8) -> EngineResult<ThrowReport> {
        self.launch()?;
        self.on_throw_settled(pins).inspect_err(|_| {
            self.state.phase = EnginePhase::AwaitingThrow;
        })
    }

    /// Start a new series with the same bowlers
    pub fn restart(&mut self) {
        for player in &mut self.state.players {
            *player = Player::new(player.name.clone());
        }
        self.state.current_player = 0;
        self.state.game_number = 1;
        self.state.phase = EnginePhase::AwaitingThrow;
        self.state.pins_down = 0;
        self.state.last_transition = Transition::None;
        log::info!("Series restarted");
    }

    /// Summary of games recorded so far
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::new(
            &self.state.players,
            self.state.games_recorded(),
            self.state.mode,
        )
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from_state(&self.state)
    }

    fn throw_event(&self, player_index: usize, outcome: &ThrowOutcome) -> ThrowEvent {
        let player = &self.state.players[player_index];
        let is_tenth = outcome.frame_index == TENTH_FRAME;
        let mark = player
            .frame(outcome.frame_index)
            .and_then(|f| f.marks(is_tenth).get(outcome.ball_index).copied());

        let callout = match mark {
            Some('X') => Callout::Strike,
            Some('/') => Callout::Spare,
            Some('-') => Callout::Gutter,
            _ => Callout::None,
        };

        ThrowEvent {
            player: player_index,
            player_name: player.name.clone(),
            frame: outcome.frame_index + 1,
            ball: outcome.ball_index + 1,
            pins: outcome.pins,
            callout,
        }
    }

    /// Partial reset only while the next ball plays the same rack
    fn reset_directive(&mut self, outcome: &ThrowOutcome) -> ResetDirective {
        let is_tenth = outcome.frame_index == TENTH_FRAME;
        let next_rack = self
            .state
            .player()
            .frame(outcome.frame_index)
            .and_then(|f| f.next_rack(is_tenth));

        let directive = match next_rack {
            Some(RackState::Partial { standing }) => {
                self.state.pins_down = PINS_PER_RACK - standing;
                ResetDirective::partial()
            }
            _ => {
                self.state.pins_down = 0;
                ResetDirective::full()
            }
        };
        debug_assert!(directive.rack == RackReset::Full || !outcome.frame_complete());
        directive
    }

    fn finish_turn(&mut self, events: &mut Vec<EngineEvent>) {
        let from = self.state.current_player;
        log::info!(
            "{} finished game {} with {}",
            self.state.player().name,
            self.state.game_number,
            self.state.player().total_score()
        );

        if !self.state.is_last_player() {
            self.state.current_player += 1;
            self.state.last_transition = Transition::TurnEnded;
            events.push(EngineEvent::TurnAdvance(TurnAdvance {
                from,
                to: self.state.current_player,
                next_name: self.state.player().name.clone(),
                game_number: self.state.game_number,
            }));
            return;
        }

        self.finish_game(from, events);
    }

    fn finish_game(&mut self, from: usize, events: &mut Vec<EngineEvent>) {
        assert!(
            self.state.game_number <= self.state.max_games,
            "game {} is past the end of a {}-game series",
            self.state.game_number,
            self.state.max_games
        );
        debug_assert!(self.state.players.iter().all(Player::is_turn_over));

        let game_number = self.state.game_number;
        let scores: Vec<u16> = self
            .state
            .players
            .iter_mut()
            .map(Player::record_game)
            .collect();
        log::info!("Game {} complete: {:?}", game_number, scores);
        events.push(EngineEvent::GameComplete(GameComplete {
            game_number,
            scores,
        }));

        if self.state.is_last_game() {
            self.state.phase = EnginePhase::SeriesComplete;
            self.state.last_transition = Transition::SeriesEnded;
            let summary = self.summary();
            log::info!(
                "Series complete after {} games, leader: {}",
                summary.games_played,
                summary.leader().map_or("-", |p| p.name.as_str())
            );
            events.push(EngineEvent::SeriesComplete(summary));
            return;
        }

        self.state.game_number += 1;
        for player in &mut self.state.players {
            player.reset();
        }
        self.state.current_player = 0;
        self.state.pins_down = 0;
        self.state.last_transition = Transition::GameEnded;
        events.push(EngineEvent::TurnAdvance(TurnAdvance {
            from,
            to: 0,
            next_name: self.state.player().name.clone(),
            game_number: self.state.game_number,
        }));
    }
}
