use crate::error::{Error, Result};
use crate::state::{Game, Player, State};
use std::fmt;

/// A position of the subtract-square game.
///
/// The players share a single whole number. On each turn the player to move subtracts a perfect
/// square (1, 4, 9, ...) that is not larger than the number. Whoever is about to play when no
/// square fits loses.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct SubtractSquareState {
    current_player: Player,
    value: u32,
}

impl SubtractSquareState {
    pub fn new(current_player: Player, value: u32) -> Self {
        Self {
            current_player,
            value,
        }
    }

    /// Returns the number the next square is subtracted from.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl State for SubtractSquareState {
    type Move = u32;

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        (1..)
            .map_while(|i: u32| i.checked_mul(i))
            .take_while(|square| *square <= self.value)
            .collect()
    }

    fn apply_move(&self, mv: &Self::Move) -> Result<Self> {
        let root = mv.isqrt();
        if *mv == 0 || root * root != *mv || *mv > self.value {
            return Err(Error::invalid_move(mv));
        }
        Ok(Self {
            current_player: self.current_player.other(),
            value: self.value - mv,
        })
    }

    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current number: {}", self.value)
    }
}

/// A subtract-square game in progress.
#[derive(Debug, Clone)]
pub struct SubtractSquare {
    current_state: SubtractSquareState,
}

impl SubtractSquare {
    /// Starts a game from `value` with `first_player` to move.
    pub fn new(first_player: Player, value: u32) -> Self {
        Self {
            current_state: SubtractSquareState::new(first_player, value),
        }
    }

    /// Plays `mv` for the player to move.
    pub fn play(&mut self, mv: u32) -> Result<()> {
        self.current_state = self.current_state.apply_move(&mv)?;
        Ok(())
    }
}

impl Game for SubtractSquare {
    type State = SubtractSquareState;

    fn current_state(&self) -> &SubtractSquareState {
        &self.current_state
    }

    /// A player has won once the game is over and it is the other player's turn.
    fn is_winner(&self, state: &SubtractSquareState, player: Player) -> bool {
        self.is_over(state) && state.current_player != player
    }
}
