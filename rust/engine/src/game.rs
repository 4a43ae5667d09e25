use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{GameEvent, Outbox};
use crate::player::{ControlMode, Player, Slot};
use crate::round::{self, RevealKind};
use crate::scheduler::{TickScheduler, TimerHandle, DEFAULT_TICK_INTERVAL};

/// Which seats are driven by a human.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Computer vs Computer, rounds fire on a timer
    AutoAuto,
    /// Human (second seat) vs Computer (first seat)
    HumanAuto,
    /// Two humans, each reveals independently
    HumanHuman,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::AutoAuto, GameMode::HumanAuto, GameMode::HumanHuman];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::AutoAuto => "auto-auto",
            GameMode::HumanAuto => "human-auto",
            GameMode::HumanHuman => "human-human",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::AutoAuto => "Computer vs Computer",
            GameMode::HumanAuto => "Human vs Computer",
            GameMode::HumanHuman => "Human vs Human",
        }
    }

    /// Name and control mode of the first and second seat.
    pub fn seats(self) -> [(&'static str, ControlMode); 2] {
        use ControlMode::{Automated, Manual};
        match self {
            GameMode::AutoAuto => [("Computer North", Automated), ("Computer South", Automated)],
            GameMode::HumanAuto => [("Computer North", Automated), ("You", Manual)],
            GameMode::HumanHuman => [("Player North", Manual), ("Player South", Manual)],
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownMode(s.to_string()))
    }
}

/// The single live game. Replaced wholesale when a new game starts.
pub struct GameSession {
    generation: u64,
    mode: GameMode,
    pub(crate) round: u32,
    pub(crate) players: [Player; 2],
    pub(crate) finished: bool,
    pub(crate) last_played: [Option<Card>; 2],
    timer: Option<Box<dyn TimerHandle>>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("generation", &self.generation)
            .field("mode", &self.mode)
            .field("round", &self.round)
            .field("players", &self.players)
            .field("finished", &self.finished)
            .field("last_played", &self.last_played)
            .field("timer", &self.timer)
            .finish()
    }
}

impl GameSession {
    pub(crate) fn new(generation: u64, mode: GameMode, players: [Player; 2]) -> Self {
        Self {
            generation,
            mode,
            round: 1,
            players,
            finished: false,
            last_played: [None, None],
            timer: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    /// Round currently being played, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, slot: Slot) -> &Player {
        &self.players[slot.index()]
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    /// Cards of the most recently resolved round.
    pub fn last_played(&self) -> [Option<Card>; 2] {
        self.last_played
    }
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score(), self.players[1].score())
    }
    pub fn has_active_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Winner by final score; only meaningful once finished.
    pub fn winner(&self) -> Option<Slot> {
        let (top, bottom) = self.scores();
        match top.cmp(&bottom) {
            std::cmp::Ordering::Greater => Some(Slot::First),
            std::cmp::Ordering::Less => Some(Slot::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub(crate) fn player_mut(&mut self, slot: Slot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub(crate) fn any_deck_empty(&self) -> bool {
        self.players.iter().any(|p| p.deck().is_empty())
    }

    pub(crate) fn both_ready(&self) -> bool {
        self.players.iter().all(|p| p.current_card().is_some())
    }

    pub(crate) fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    SelectingMode,
    InProgress,
    Concluded,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IgnoreReason {
    NoSession,
    Finished,
    NotManual,
    AlreadyRevealed,
    /// Tick armed by a session that no longer exists, or a non-timer session
    StaleTick,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Seed for deck shuffling; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Cadence of automated rounds
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Owns the live session and is its only writer.
///
/// Every command runs to completion before the next one is accepted, so two
/// rounds are never processed at the same time. Notifications queue up in an
/// outbox drained by [`GameController::take_events`].
///
/// # Examples
///
/// ```
/// use cardwar_engine::game::{GameController, GameMode, GameSettings, Phase};
/// use cardwar_engine::player::Slot;
/// use cardwar_engine::scheduler::ManualScheduler;
///
/// let settings = GameSettings { seed: Some(7), ..GameSettings::default() };
/// let mut game = GameController::new(ManualScheduler::new(), settings);
/// game.select_mode(GameMode::HumanHuman);
///
/// game.human_reveal(Slot::First);
/// game.human_reveal(Slot::Second);
/// assert_eq!(game.session().unwrap().round(), 2);
///
/// game.return_to_menu();
/// assert_eq!(game.phase(), Phase::SelectingMode);
/// ```
#[derive(Debug)]
pub struct GameController<S: TickScheduler> {
    scheduler: S,
    settings: GameSettings,
    rng: ChaCha20Rng,
    generation: u64,
    session: Option<GameSession>,
    outbox: Outbox,
}

impl<S: TickScheduler> GameController<S> {
    pub fn new(scheduler: S, settings: GameSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self {
            scheduler,
            settings,
            rng: ChaCha20Rng::seed_from_u64(seed),
            generation: 0,
            session: None,
            outbox: Outbox::default(),
        }
    }

    /// Starts a fresh game with a newly shuffled and partitioned deck.
    pub fn select_mode(&mut self, mode: GameMode) {
        let (first, second) = Deck::shuffled_with(&mut self.rng).split_in_half();
        self.start(mode, first, second);
    }

    /// Starts a fresh game with caller-supplied decks.
    pub fn start_with_decks(
        &mut self,
        mode: GameMode,
        first: Deck,
        second: Deck,
    ) -> Result<(), GameError> {
        if first.is_empty() {
            return Err(GameError::EmptyDeck(Slot::First));
        }
        if second.is_empty() {
            return Err(GameError::EmptyDeck(Slot::Second));
        }
        self.start(mode, first, second);
        Ok(())
    }

    fn start(&mut self, mode: GameMode, first: Deck, second: Deck) {
        self.teardown();
        self.generation += 1;

        let [(first_name, first_control), (second_name, second_control)] = mode.seats();
        let players = [
            Player::new(first_name, first_control, first),
            Player::new(second_name, second_control, second),
        ];
        let mut session = GameSession::new(self.generation, mode, players);

        tracing::info!(
            generation = self.generation,
            mode = %mode,
            "starting new game"
        );
        self.outbox.log(format!("Starting {} game.", mode.label()));
        match mode {
            GameMode::AutoAuto => {
                self.outbox
                    .log("Both computers are playing automatically. Watch the showdown!");
                session.timer = Some(
                    self.scheduler
                        .schedule_repeating(self.generation, self.settings.tick_interval),
                );
            }
            GameMode::HumanAuto => self.outbox.log(
                "Reveal your card to start the round. The computer will respond automatically.",
            ),
            GameMode::HumanHuman => {}
        }
        self.session = Some(session);
    }

    /// A human asks to play the next card of `slot`.
    pub fn human_reveal(&mut self, slot: Slot) -> ActionOutcome {
        let outcome = self.try_human_reveal(slot);
        if let ActionOutcome::Ignored(reason) = outcome {
            tracing::debug!(slot = %slot, reason = ?reason, "reveal ignored");
        }
        outcome
    }

    fn try_human_reveal(&mut self, slot: Slot) -> ActionOutcome {
        let Some(session) = self.session.as_mut() else {
            return ActionOutcome::Ignored(IgnoreReason::NoSession);
        };
        if session.finished {
            return ActionOutcome::Ignored(IgnoreReason::Finished);
        }
        let player = session.player_mut(slot);
        if !player.is_manual() {
            return ActionOutcome::Ignored(IgnoreReason::NotManual);
        }
        if player.current_card().is_some() {
            return ActionOutcome::Ignored(IgnoreReason::AlreadyRevealed);
        }

        let outbox = &mut self.outbox;
        let Some(card) = round::draw_card(player) else {
            round::conclude(session, outbox);
            return ActionOutcome::Applied;
        };
        round::reveal(session, slot, card, RevealKind::Human, outbox);

        match session.mode() {
            GameMode::HumanAuto => automated_response(session, slot.other(), outbox),
            GameMode::HumanHuman => {
                if session.both_ready() {
                    round::resolve_round(session, outbox);
                }
            }
            GameMode::AutoAuto => {}
        }
        ActionOutcome::Applied
    }

    /// One timer-driven round of an automated game.
    pub fn tick(&mut self, generation: u64) -> ActionOutcome {
        let Some(session) = self.session.as_mut() else {
            tracing::debug!(generation, "tick without session dropped");
            return ActionOutcome::Ignored(IgnoreReason::NoSession);
        };
        if session.generation() != generation || session.mode() != GameMode::AutoAuto {
            tracing::debug!(
                generation,
                live = session.generation(),
                "stale tick dropped"
            );
            return ActionOutcome::Ignored(IgnoreReason::StaleTick);
        }
        if session.finished {
            return ActionOutcome::Ignored(IgnoreReason::Finished);
        }

        let outbox = &mut self.outbox;
        if session.any_deck_empty() {
            round::conclude(session, outbox);
            return ActionOutcome::Applied;
        }
        for slot in Slot::BOTH {
            let Some(card) = round::draw_card(session.player_mut(slot)) else {
                round::conclude(session, outbox);
                return ActionOutcome::Applied;
            };
            round::reveal(session, slot, card, RevealKind::Automatic, outbox);
        }
        round::resolve_round(session, outbox);
        ActionOutcome::Applied
    }

    /// Cancels any pending timer and discards the session.
    pub fn return_to_menu(&mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.cancel_timer();
            tracing::debug!(generation = session.generation(), "session discarded");
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::SelectingMode,
            Some(s) if s.finished => Phase::Concluded,
            Some(_) => Phase::InProgress,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Drains queued notifications in emission order.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.outbox.take()
    }
}

/// The computer answers a human reveal and the round resolves right away.
fn automated_response(session: &mut GameSession, slot: Slot, outbox: &mut Outbox) {
    let player = session.player_mut(slot);
    if player.control() != ControlMode::Automated || player.current_card().is_some() {
        return;
    }
    let Some(card) = round::draw_card(player) else {
        round::conclude(session, outbox);
        return;
    };
    round::reveal(session, slot, card, RevealKind::Response, outbox);
    round::resolve_round(session, outbox);
}
