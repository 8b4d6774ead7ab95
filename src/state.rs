use crate::error::Result;
use std::fmt::Debug;
use std::ops::Neg;

/// The central trait of the library, defining the interface for a game position.
///
/// A state is an immutable snapshot: applying a move never modifies the receiver,
/// it produces the successor state with the turn passed to the other player.
pub trait State: Clone {
    /// The type representing a move in the game. This could be a simple `u32` for a number
    /// to subtract or a more complex struct for games with intricate actions.
    type Move: Clone + PartialEq + Debug;

    /// Returns all legal moves from this state.
    ///
    /// The order is decided by the game but must be the same on every call for the same state.
    /// An empty list means the game is over.
    fn get_possible_moves(&self) -> Vec<Self::Move>;

    /// Returns the state that results from applying `mv` to this state.
    ///
    /// Fails with [`Error::InvalidMove`](crate::error::Error::InvalidMove) when `mv` is not
    /// one of [`State::get_possible_moves`].
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Returns the player whose turn it is to make a move.
    fn current_player(&self) -> Player;

    /// Returns `true` if there are no legal moves left.
    fn is_terminal(&self) -> bool {
        self.get_possible_moves().is_empty()
    }
}

/// A game in progress: the current position plus the rules that decide who has won.
pub trait Game {
    /// The position type of this game.
    type State: State;

    /// Returns the position the next move is made from.
    fn current_state(&self) -> &Self::State;

    /// Returns whether `player` has won at `state`.
    ///
    /// Only consulted for terminal states. A terminal state where neither player is flagged
    /// as the winner is a draw.
    fn is_winner(&self, state: &Self::State, player: Player) -> bool;

    /// Returns whether the game is over at `state`.
    fn is_over(&self, state: &Self::State) -> bool {
        state.is_terminal()
    }
}

/// The two identities taking turns in a game.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// The first player.
    One = 1,
    /// The second player.
    Two = 2,
}

impl Player {
    /// Returns the opponent of this player.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The game-theoretic value of a state for the player about to move.
///
/// Ordered `Loss < Draw < Win`; negation swaps the point of view to the opponent.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub enum Score {
    /// The player to move loses with best play from both sides.
    Loss = -1,
    /// Neither player can force a win.
    Draw = 0,
    /// The player to move can force a win.
    Win = 1,
}

impl Score {
    /// Returns the numeric value of the score: `-1`, `0` or `1`.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}
