use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{MoveError, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameResult, Mark, Position, SideChoiceError, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingSideChoice,
    InProgress,
    Finished,
}

/// Everything an observer may show, taken after a transition has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub board: Board,
    pub result: GameResult,
    pub human_turn: bool,
    pub human_mark: Option<Mark>,
    pub computer_mark: Option<Mark>,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

pub trait SessionObserver {
    fn on_state_changed(&mut self, snapshot: &SessionSnapshot);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Human-versus-computer session controller.
///
/// Every public operation runs to completion before returning: a human move that
/// leaves the computer to play also computes and applies the computer's reply.
/// Observers get one notification per accepted operation, after all of it is done.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    game_state: Option<TicTacToeGameState>,
    rng: SessionRng,
    observers: Vec<(ObserverId, Box<dyn SessionObserver>)>,
    next_observer_id: u64,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self {
            settings,
            game_state: None,
            rng,
            observers: Vec::new(),
            next_observer_id: 0,
        })
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn game_state(&self) -> Option<&TicTacToeGameState> {
        self.game_state.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.game_state {
            None => SessionPhase::AwaitingSideChoice,
            Some(state) if state.is_over() => SessionPhase::Finished,
            Some(_) => SessionPhase::InProgress,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let phase = self.phase();
        match &self.game_state {
            Some(state) => SessionSnapshot {
                phase,
                board: state.board.clone(),
                result: state.result,
                human_turn: state.human_turn,
                human_mark: Some(state.human_mark),
                computer_mark: Some(state.computer_mark),
                last_move: state.last_move,
                winning_line: state.winning_line,
            },
            None => SessionSnapshot {
                phase,
                board: Board::new(self.settings.board_side),
                result: GameResult::Undecided,
                human_turn: true,
                human_mark: None,
                computer_mark: None,
                last_move: None,
                winning_line: None,
            },
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn choose_side(&mut self, mark: Mark) -> Result<(), SideChoiceError> {
        if self.game_state.is_some() {
            return Err(SideChoiceError::NotAwaitingSideChoice);
        }

        let game_state = TicTacToeGameState::new(self.settings.board_side, mark)?;
        log!(
            "Human plays {:?}, computer plays {:?} ({} bot)",
            game_state.human_mark,
            game_state.computer_mark,
            self.settings.bot_type
        );
        self.game_state = Some(game_state);

        self.notify_observers();
        Ok(())
    }

    pub fn choose_side_value(&mut self, raw: &str) -> Result<(), SideChoiceError> {
        let mark = Mark::from_side_value(raw).ok_or_else(|| SideChoiceError::Unparseable {
            input: raw.to_string(),
        })?;
        self.choose_side(mark)
    }

    /// Returns whether the move was accepted. Rejected moves change nothing and are not errors.
    pub fn apply_human_move(&mut self, cell_index: usize) -> bool {
        match self.try_human_move(cell_index) {
            Ok(()) => {
                self.play_computer_turn();
                self.log_result();
                self.notify_observers();
                true
            }
            Err(e) => {
                log!("Ignoring move at cell {}: {}", cell_index, e);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.game_state = None;
        log!("Session reset");
        self.notify_observers();
    }

    fn try_human_move(&mut self, cell_index: usize) -> Result<(), MoveError> {
        let game_state = self
            .game_state
            .as_mut()
            .ok_or(MoveError::NoGameInProgress)?;

        if game_state.is_over() {
            return Err(MoveError::GameOver);
        }
        if !game_state.human_turn {
            return Err(MoveError::NotHumanTurn);
        }

        let position = game_state.position_for_index(cell_index)?;
        game_state.place_mark(position)
    }

    fn play_computer_turn(&mut self) {
        let Some(game_state) = self.game_state.as_mut() else {
            return;
        };
        if game_state.is_over() || game_state.human_turn {
            return;
        }

        let input = BotInput::from_game_state(game_state);
        let bot_move = match calculate_move(self.settings.bot_type, &input, &mut self.rng) {
            Ok(bot_move) => bot_move,
            Err(e) => {
                // Unreachable: the board is undecided, the computer's mark is X or O and
                // settings validation keeps minimax on 3x3. Failing here would leave the
                // session stuck on the computer's turn.
                log!("Computer could not move: {}", e);
                return;
            }
        };

        match game_state.apply_bot_move(&bot_move) {
            Ok(()) => log!(
                "Computer {:?} played ({}, {}) with score {}",
                game_state.computer_mark,
                bot_move.position.x,
                bot_move.position.y,
                bot_move.score
            ),
            Err(e) => log!(
                "Computer move at ({}, {}) rejected: {}",
                bot_move.position.x,
                bot_move.position.y,
                e
            ),
        }
    }

    fn log_result(&self) {
        let Some(game_state) = &self.game_state else {
            return;
        };
        match game_state.winner_is_human() {
            Some(true) => log!("Human wins as {:?}", game_state.human_mark),
            Some(false) => log!("Computer wins as {:?}", game_state.computer_mark),
            None if game_state.result == GameResult::Draw => log!("Game ends in a draw"),
            None => {}
        }
    }

    fn notify_observers(&mut self) {
        let snapshot = self.snapshot();
        for (_, observer) in self.observers.iter_mut() {
            observer.on_state_changed(&snapshot);
        }
    }
}
