use crate::error::{Error, Result};
use crate::state::{Player, Score, State};
use ego_tree::Tree;

pub use ego_tree::NodeId;

/// Represents a single node in the negamax search tree.
///
/// Each node stores the game state it was reached at, the move that led to it and,
/// once resolved, its score from the point of view of the player to move.
#[derive(Debug, Clone)]
pub struct SearchNode<S: State> {
    /// The depth of the node in the tree.
    pub height: u32,
    /// The game state that this node represents.
    pub state: S,
    /// The move that led to this node's state from its parent. `None` for the root node.
    pub prev_move: Option<S::Move>,
    /// The player whose turn it is in this node's game state.
    pub current_player: Player,
    /// The negamax score of the node. `None` until resolved.
    pub score: Option<Score>,
}

impl<S: State> SearchNode<S> {
    /// Creates an unvisited root node for `state`.
    pub fn new(state: S) -> Self {
        let current_player = state.current_player();
        SearchNode {
            height: 0,
            state,
            prev_move: None,
            current_player,
            score: None,
        }
    }

    fn child(parent_height: u32, state: S, mv: S::Move) -> Self {
        let mut node = SearchNode::new(state);
        node.height = parent_height + 1;
        node.prev_move = Some(mv);
        node
    }

    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }
}

/// A search tree built fresh for one top-level decision.
///
/// Nodes live in an arena owned by the tree and are addressed by [`NodeId`]; every child has
/// exactly one parent, the node it was appended under.
#[derive(Debug)]
pub struct SearchTree<S: State> {
    tree: Tree<SearchNode<S>>,
    root_id: NodeId,
    len: usize,
}

impl<S: State> SearchTree<S> {
    /// Creates a tree holding a single unvisited root node for `state`.
    pub fn new(state: S) -> Self {
        Self::from_tree(Tree::new(SearchNode::new(state)))
    }

    /// Creates a tree whose arena can hold `capacity` nodes before reallocating.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        Self::from_tree(Tree::with_capacity(SearchNode::new(state), capacity))
    }

    fn from_tree(tree: Tree<SearchNode<S>>) -> Self {
        let root_id = tree.root().id();
        Self {
            tree,
            root_id,
            len: 1,
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Returns the root node.
    pub fn root(&self) -> &SearchNode<S> {
        self.tree.root().value()
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Result<&SearchNode<S>> {
        self.tree
            .get(id)
            .map(|node| node.value())
            .ok_or(Error::UnknownNode)
    }

    /// Returns the ids of the children of `id`, in the order they were appended.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.tree.get(id).ok_or(Error::UnknownNode)?;
        Ok(node.children().map(|child| child.id()).collect())
    }

    /// Returns `true` once children have been appended under `id`.
    pub fn is_expanded(&self, id: NodeId) -> Result<bool> {
        let node = self.tree.get(id).ok_or(Error::UnknownNode)?;
        Ok(node.has_children())
    }

    /// Appends a new unvisited child reached from `parent` by `mv`.
    pub fn append_child(&mut self, parent: NodeId, state: S, mv: S::Move) -> Result<NodeId> {
        let mut parent_node = self.tree.get_mut(parent).ok_or(Error::UnknownNode)?;
        let height = parent_node.value().height;
        let child_id = parent_node.append(SearchNode::child(height, state, mv)).id();
        self.len += 1;
        Ok(child_id)
    }

    /// Records the resolved score of `id`.
    pub fn set_score(&mut self, id: NodeId, score: Score) -> Result<()> {
        let mut node = self.tree.get_mut(id).ok_or(Error::UnknownNode)?;
        node.value().score = Some(score);
        Ok(())
    }

    /// Returns the moves from `id` that achieve its resolved score, in children order.
    ///
    /// A child is optimal when its negated score equals the score of `id`.
    pub fn optimal_moves(&self, id: NodeId) -> Result<Vec<S::Move>> {
        let node = self.tree.get(id).ok_or(Error::UnknownNode)?;
        let score = node.value().score.ok_or(Error::UnresolvedNode)?;
        let mut moves = Vec::new();
        for child in node.children() {
            let child = child.value();
            let child_score = child.score.ok_or(Error::UnresolvedNode)?;
            if -child_score == score {
                if let Some(mv) = &child.prev_move {
                    moves.push(mv.clone());
                }
            }
        }
        Ok(moves)
    }
}
