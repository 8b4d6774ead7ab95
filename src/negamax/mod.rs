//! Exhaustive negamax over the full game tree, in two equivalent forms.
//!
//! Both engines score a state from the point of view of the player about to move and agree
//! on every input: [`recursive`] walks the tree on the call stack, [`iterative`] builds it
//! explicitly and resolves it in post-order from a [`SearchStack`](crate::search_stack::SearchStack).

use crate::state::{Game, Player, Score};

/// Recursive negamax on the native call stack.
pub mod recursive;
/// Iterative negamax over an explicitly built search tree.
pub mod iterative;

/// Scores a state that has no legal moves.
///
/// The player to move loses when either tracked identity is flagged as the winner of `state`,
/// otherwise the game ended in a draw.
pub fn terminal_score<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    opponent: Player,
) -> Score {
    if game.is_winner(state, player) || game.is_winner(state, opponent) {
        Score::Loss
    } else {
        Score::Draw
    }
}

#[cfg(test)]
mod tests {
    use crate::games::subtract_square::SubtractSquare;
    use crate::games::tic_tac_toe::TicTacToe;
    use crate::negamax::terminal_score;
    use crate::state::{Game, Player, Score};

    #[test]
    fn finished_game_with_winner_is_a_loss_for_the_mover() {
        let game = SubtractSquare::new(Player::One, 0);
        let state = game.current_state();

        let score = terminal_score(&game, state, Player::One, Player::Two);

        assert_eq!(score, Score::Loss);
    }

    #[test]
    fn finished_game_without_winner_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let game = TicTacToe::from_cells("XOXXOOOXX").unwrap();
        let state = game.current_state();

        let score = terminal_score(&game, state, Player::Two, Player::One);

        assert_eq!(score, Score::Draw);
    }
}
