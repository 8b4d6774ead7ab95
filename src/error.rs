use thiserror::Error;

/// Errors raised while searching a game tree.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A move was applied to a state that does not list it as legal.
    #[error("invalid move: {mv} is not a legal move in this state")]
    InvalidMove { mv: String },

    /// `remove` was called on an empty `SearchStack`.
    #[error("cannot remove from an empty search stack")]
    StackUnderflow,

    /// A move was requested for a game that is already over.
    #[error("no legal moves available: the game is over")]
    NoLegalMoves,

    /// A node was reduced while one of its children still had no score.
    #[error("BUG: node reduced before all of its children were resolved")]
    UnresolvedNode,

    /// A node id that does not belong to the tree being searched.
    #[error("BUG: node id does not belong to this search tree")]
    UnknownNode,
}

impl Error {
    /// Builds an `InvalidMove` error from any debuggable move.
    pub fn invalid_move<M: std::fmt::Debug>(mv: &M) -> Self {
        Error::InvalidMove {
            mv: format!("{mv:?}"),
        }
    }
}

/// Convenience type alias for results using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
