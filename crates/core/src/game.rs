//! Game module - drives a board from actions and elapsed time
//!
//! [`Game`] is the single owner of a [`Board`] during play. Input actions and
//! gravity ticks both go through `&mut self`, so they are serialized by the
//! caller's event loop. The gravity source is injected as a [`Gravity`] value.

use crate::board::Board;
use crate::generator::{RandomGenerator, ShapeGenerator};
use crate::gravity::Gravity;
use crate::snapshot::BoardSnapshot;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Game<G = RandomGenerator> {
    board: Board<G>,
    gravity: Gravity,
}

impl<G: ShapeGenerator> Game<G> {
    /// Take ownership of a board and spawn its first piece
    pub fn new(mut board: Board<G>, gravity: Gravity) -> Self {
        board.start();
        Self { board, gravity }
    }

    pub fn board(&self) -> &Board<G> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Apply one input action. Returns whether the board accepted it.
    ///
    /// `Restart` is not handled here: a new game means a new board, which the
    /// caller builds.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.board.is_game_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.board.move_left(),
            GameAction::MoveRight => self.board.move_right(),
            GameAction::SoftDrop => {
                let moved = self.board.move_down();
                if !moved {
                    // Fresh piece, fresh gravity interval.
                    self.gravity.reset();
                }
                true
            }
            GameAction::HardDrop => {
                self.board.hard_drop();
                self.gravity.reset();
                true
            }
            GameAction::RotateCw => self.board.rotate_right(),
            GameAction::RotateCcw => self.board.rotate_left(),
            GameAction::Restart => false,
        }
    }

    /// Advance time. Each completed gravity interval moves the piece down one
    /// row (locking it when supported). Returns the number of steps applied.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if self.board.is_game_over() {
            return 0;
        }
        let steps = self.gravity.advance(elapsed_ms);
        let mut applied = 0;
        for _ in 0..steps {
            if self.board.is_game_over() {
                break;
            }
            self.board.move_down();
            applied += 1;
        }
        applied
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SequenceGenerator;
    use crate::types::PieceKind;

    fn game_of(kind: PieceKind) -> Game<SequenceGenerator> {
        let board = Board::with_generator(10, 20, SequenceGenerator::repeat(kind)).unwrap();
        Game::new(board, Gravity::new(500))
    }

    #[test]
    fn new_game_has_an_active_piece() {
        let game = game_of(PieceKind::T);
        assert!(game.board().active_shape().is_some());
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn tick_applies_gravity_per_interval() {
        let mut game = game_of(PieceKind::O);
        assert_eq!(game.tick(499), 0);
        assert_eq!(game.board().anchor(), (5, 0));
        assert_eq!(game.tick(1), 1);
        assert_eq!(game.board().anchor(), (5, 1));
        assert_eq!(game.tick(1000), 2);
        assert_eq!(game.board().anchor(), (5, 3));
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn actions_map_to_board_commands() {
        let mut game = game_of(PieceKind::T);
        assert!(game.apply_action(GameAction::MoveLeft));
        assert_eq!(game.board().anchor(), (4, 0));
        assert!(game.apply_action(GameAction::MoveRight));
        assert!(game.apply_action(GameAction::RotateCw));
        assert!(game.apply_action(GameAction::RotateCcw));
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.board().anchor(), (5, 1));
        assert!(!game.apply_action(GameAction::Restart));
    }

    #[test]
    fn hard_drop_resets_gravity_phase() {
        let mut game = game_of(PieceKind::O);
        game.tick(400);
        assert!(game.apply_action(GameAction::HardDrop));
        assert_eq!(game.score(), 180);
        // The 400ms already accumulated were discarded.
        assert_eq!(game.tick(400), 0);
        assert_eq!(game.board().anchor(), (5, 0));
    }

    #[test]
    fn nothing_happens_after_game_over() {
        let mut game = game_of(PieceKind::O);
        while !game.is_game_over() {
            game.apply_action(GameAction::HardDrop);
        }
        let score = game.score();
        assert!(!game.apply_action(GameAction::HardDrop));
        assert!(!game.apply_action(GameAction::MoveLeft));
        assert_eq!(game.tick(10_000), 0);
        assert_eq!(game.score(), score);
    }
}
