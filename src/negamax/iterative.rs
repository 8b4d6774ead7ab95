use crate::error::{Error, Result};
use crate::negamax::terminal_score;
use crate::search_stack::SearchStack;
use crate::search_tree::SearchTree;
use crate::state::{Game, Player, Score, State};
use log::{debug, trace};

/// Returns the negamax score of `state` for `player` without recursing on the call stack.
///
/// Equivalent to [`recursive::score`](crate::negamax::recursive::score) for every input.
pub fn score<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    opponent: Player,
) -> Result<Score> {
    let mut tree = SearchTree::new(state.clone());
    resolve(game, &mut tree, player, opponent)
}

/// Resolves every node of `tree` and returns the score of its root.
///
/// `player` is the identity to move at the root and `opponent` the other one. Nodes are
/// visited at most twice: the first visit either scores a terminal node or re-pushes the node
/// under one fresh child per legal move, and the second visit reduces it once every child has
/// been resolved.
pub fn resolve<G: Game>(
    game: &G,
    tree: &mut SearchTree<G::State>,
    player: Player,
    opponent: Player,
) -> Result<Score> {
    let root_id = tree.root_id();
    let mut stack = SearchStack::new();
    stack.add(root_id);
    let mut visits = 0usize;

    while !stack.is_empty() {
        let node_id = stack.remove()?;
        visits += 1;
        let node = tree.node(node_id)?;
        if node.is_resolved() {
            continue;
        }

        if tree.is_expanded(node_id)? {
            let mut best: Option<Score> = None;
            for child_id in tree.children(node_id)? {
                let child_score = tree.node(child_id)?.score.ok_or(Error::UnresolvedNode)?;
                best = best.max(Some(-child_score));
            }
            let score = best.ok_or(Error::UnresolvedNode)?;
            trace!("reduced node at height {} to {score:?}", node.height);
            tree.set_score(node_id, score)?;
            continue;
        }

        let moves = node.state.get_possible_moves();
        if moves.is_empty() {
            // The winner check covers both identities, so the pair needs no swapping by depth.
            let score = terminal_score(game, &node.state, player, opponent);
            trace!("terminal node at height {} scored {score:?}", node.height);
            tree.set_score(node_id, score)?;
            continue;
        }

        let state = node.state.clone();
        stack.add(node_id);
        for mv in moves {
            let child_state = state.apply_move(&mv)?;
            let child_id = tree.append_child(node_id, child_state, mv)?;
            stack.add(child_id);
        }
    }

    let root_score = tree.root().score.ok_or(Error::UnresolvedNode)?;
    debug!(
        "resolved search tree of {} nodes in {visits} visits, root score {root_score:?}",
        tree.len()
    );
    Ok(root_score)
}
