//! Contains pre-made implementations of the `State` and `Game` traits for small games.

/// The subtract-square game: players take turns subtracting a perfect square.
pub mod subtract_square;
/// A `Game` implementation for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;
