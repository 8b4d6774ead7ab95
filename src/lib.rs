//! A small and simple library for exhaustive negamax search.
//!
//! This library computes the game-theoretically optimal move in two-player, perfect-information,
//! zero-sum games. Any game can be searched once its positions implement the `State` trait and
//! the game itself implements the `Game` trait. Two equivalent engines are provided: a recursive
//! one that walks the game tree on the call stack, and an iterative one that builds the tree
//! explicitly and resolves it with its own stack, so search depth is not limited by the size of
//! the native call stack. Both choose the same move for the same position.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::games::subtract_square::SubtractSquare;
//! use minimax_lib::selector::{MoveSelector, Strategy, DEFAULT_NODE_CAPACITY};
//! use minimax_lib::state::Player;
//!
//! // Start a subtract-square game from 25 with the first player to move
//! let game = SubtractSquare::new(Player::One, 25);
//!
//! // Create and configure a move selector using the builder
//! let selector = MoveSelector::builder()
//!     .with_strategy(Strategy::Iterative)
//!     .with_node_capacity(DEFAULT_NODE_CAPACITY)
//!     .build();
//!
//! // Get the optimal move
//! let best_move = selector.select_move(&game).unwrap();
//!
//! assert_eq!(best_move, 25);
//! ```

/// Error type shared by every search operation.
pub mod error;
/// Contains pre-made implementations of the `State` and `Game` traits for small games.
pub mod games;
/// The recursive and iterative negamax engines.
pub mod negamax;
/// Contains the LIFO work list that drives the iterative engine.
pub mod search_stack;
/// Contains the `SearchTree` built by the iterative engine.
pub mod search_tree;
/// The public entry point: picks the optimal move for a game in progress.
pub mod selector;
/// Contains the `State` and `Game` traits that define the interface for a game.
pub mod state;

pub use error::{Error, Result};
pub use selector::{MoveSelector, Strategy, iterative_select_move, recursive_select_move};
pub use state::{Game, Player, Score, State};
