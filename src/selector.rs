use crate::error::{Error, Result};
use crate::negamax::{iterative, recursive};
use crate::search_tree::SearchTree;
use crate::state::{Game, Score, State};
use log::debug;

/// The initial number of nodes the search tree arena is allocated for.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// The engine used to score candidate moves. Both engines choose the same move for the same
/// state.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Strategy {
    /// Scores each successor state with recursive negamax on the call stack.
    Recursive,
    /// Builds one search tree for the whole decision and resolves it with an explicit stack.
    #[default]
    Iterative,
}

/// Picks the game-theoretically optimal move for the player to act.
///
/// A selector holds configuration only; every call builds and discards its own search data, so
/// one selector can be reused across games and positions.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    strategy: Strategy,
    node_capacity: usize,
}

impl Default for MoveSelector {
    fn default() -> Self {
        MoveSelectorBuilder::new().build()
    }
}

/// A builder for creating instances of `MoveSelector`.
pub struct MoveSelectorBuilder {
    strategy: Strategy,
    node_capacity: usize,
}

impl Default for MoveSelectorBuilder {
    fn default() -> Self {
        MoveSelectorBuilder::new()
    }
}

impl MoveSelectorBuilder {
    /// Creates a new builder with the iterative strategy and the default node capacity.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Sets the engine used to score moves.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the initial node capacity of the search tree. Only used by the iterative strategy.
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn build(self) -> MoveSelector {
        MoveSelector {
            strategy: self.strategy,
            node_capacity: self.node_capacity,
        }
    }
}

impl MoveSelector {
    /// Returns a new builder for `MoveSelector`.
    pub fn builder() -> MoveSelectorBuilder {
        MoveSelectorBuilder::new()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the optimal move from the current state of `game`.
    ///
    /// Ties are broken by taking the first optimal move in the order returned by
    /// [`State::get_possible_moves`]. Fails with [`Error::NoLegalMoves`] if the game is over.
    pub fn select_move<G: Game>(&self, game: &G) -> Result<<G::State as State>::Move> {
        let (mv, score) = match self.strategy {
            Strategy::Recursive => self.select_recursive(game)?,
            Strategy::Iterative => self.select_iterative(game)?,
        };
        debug!(
            "{:?} search selected {mv:?} with score {score:?}",
            self.strategy
        );
        Ok(mv)
    }

    fn select_recursive<G: Game>(&self, game: &G) -> Result<(<G::State as State>::Move, Score)> {
        let state = game.current_state();
        let player = state.current_player();
        let opponent = player.other();

        let mut best: Option<(<G::State as State>::Move, Score)> = None;
        for mv in state.get_possible_moves() {
            let next_state = state.apply_move(&mv)?;
            let score = -recursive::score(game, &next_state, opponent, player)?;
            if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
                best = Some((mv, score));
            }
        }
        best.ok_or(Error::NoLegalMoves)
    }

    fn select_iterative<G: Game>(&self, game: &G) -> Result<(<G::State as State>::Move, Score)> {
        let state = game.current_state();
        if state.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let player = state.current_player();

        let mut tree = SearchTree::with_capacity(state.clone(), self.node_capacity);
        let score = iterative::resolve(game, &mut tree, player, player.other())?;
        let mv = tree
            .optimal_moves(tree.root_id())?
            .into_iter()
            .next()
            .ok_or(Error::UnresolvedNode)?;
        Ok((mv, score))
    }
}

/// Returns the optimal move from the current state of `game` using recursive negamax.
pub fn recursive_select_move<G: Game>(game: &G) -> Result<<G::State as State>::Move> {
    MoveSelector::builder()
        .with_strategy(Strategy::Recursive)
        .build()
        .select_move(game)
}

/// Returns the optimal move from the current state of `game` using iterative negamax.
pub fn iterative_select_move<G: Game>(game: &G) -> Result<<G::State as State>::Move> {
    MoveSelector::builder()
        .with_strategy(Strategy::Iterative)
        .build()
        .select_move(game)
}
