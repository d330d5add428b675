//! Play session: one game at a time, restarts, and the high score table.
//!
//! The session does not touch the terminal. Diagnostics are queued as
//! tagged lines (`[Game] ...`, `[Scores] ...`) for the binary to print once
//! the screen has been restored.

use crate::config::GameConfig;
use crate::core::{Board, BoardError, BoardSnapshot, Game, Gravity, ShapeGenerator};
use crate::scores::{HighScores, ScoreStore};
use crate::types::GameAction;

pub type DynGame = Game<Box<dyn ShapeGenerator>>;

pub struct Session<S: ScoreStore> {
    config: GameConfig,
    store: S,
    ranking: HighScores,
    game: DynGame,
    /// Games started so far, including the current one
    games: u32,
    recorded: bool,
    log: Vec<String>,
}

impl<S: ScoreStore> Session<S> {
    /// Load the ranking and start the first game. An unreadable score file is
    /// logged and replaced by an empty table.
    pub fn new(config: GameConfig, store: S) -> Result<Self, BoardError> {
        let mut log = Vec::new();
        let ranking = match store.load() {
            Ok(ranking) => ranking,
            Err(err) => {
                log.push(format!("[Scores] ignoring unreadable score table: {err}"));
                HighScores::new()
            }
        };
        let game = build_game(&config, 0)?;

        Ok(Self {
            config,
            store,
            ranking,
            game,
            games: 1,
            recorded: false,
            log,
        })
    }

    pub fn game(&self) -> &DynGame {
        &self.game
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.game.snapshot()
    }

    pub fn ranking(&self) -> &HighScores {
        &self.ranking
    }

    pub fn player(&self) -> &str {
        &self.config.player
    }

    pub fn games_played(&self) -> u32 {
        self.games
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Route one input action. `Restart` ends the current game (recording it)
    /// and starts a new one.
    pub fn apply(&mut self, action: GameAction) -> Result<(), BoardError> {
        if action == GameAction::Restart {
            return self.restart();
        }
        self.game.apply_action(action);
        self.settle();
        Ok(())
    }

    /// Feed elapsed time to gravity
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
        self.settle();
    }

    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.finish();
        self.game = build_game(&self.config, self.games)?;
        self.games = self.games.wrapping_add(1);
        self.recorded = false;
        self.log.push(format!("[Game] game {} started", self.games));
        Ok(())
    }

    /// Record the current game's score if it has not been recorded yet.
    /// Games that scored nothing are not recorded.
    pub fn finish(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;

        let score = self.game.score();
        self.log.push(format!(
            "[Game] game {} ended: score={} lines={} game_over={}",
            self.games,
            score,
            self.game.board().lines(),
            self.game.is_game_over()
        ));
        if score == 0 {
            return;
        }

        match self.ranking.record(self.config.player.as_str(), score) {
            Some(rank) => {
                self.log
                    .push(format!("[Scores] {} placed #{rank} with {score}", self.config.player));
                if let Err(err) = self.store.save(&self.ranking) {
                    self.log.push(format!("[Scores] failed to save score table: {err}"));
                }
            }
            None => self
                .log
                .push(format!("[Scores] {score} did not make the top {}", crate::scores::SLOTS)),
        }
    }

    /// Take the queued diagnostic lines
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    fn settle(&mut self) {
        if self.game.is_game_over() {
            self.finish();
        }
    }
}

fn build_game(config: &GameConfig, game: u32) -> Result<DynGame, BoardError> {
    let board = Board::with_generator(config.columns, config.rows, config.generator(game))?;
    Ok(Game::new(board, Gravity::new(config.gravity_ms)))
}
