use crate::error::Result;
use crate::negamax::terminal_score;
use crate::state::{Game, Player, Score, State};
use log::trace;

/// Returns the negamax score of `state` for `player`, the player about to move.
///
/// `score(s) = max over m of -score(s.apply_move(m))`, with the identities swapped on every ply.
/// The state is passed down explicitly; the game is only consulted to classify terminal states.
pub fn score<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    opponent: Player,
) -> Result<Score> {
    let moves = state.get_possible_moves();
    if moves.is_empty() {
        let score = terminal_score(game, state, player, opponent);
        trace!("terminal state for {player:?} scored {score:?}");
        return Ok(score);
    }

    let mut best = Score::Loss;
    for mv in &moves {
        let next_state = state.apply_move(mv)?;
        let child_score = -score(game, &next_state, opponent, player)?;
        if child_score > best {
            best = child_score;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use crate::games::subtract_square::{SubtractSquare, SubtractSquareState};
    use crate::negamax::recursive::score;
    use crate::state::{Player, Score};

    fn score_of(value: u32) -> Score {
        let game = SubtractSquare::new(Player::One, value);
        let state = SubtractSquareState::new(Player::One, value);
        score(&game, &state, Player::One, Player::Two).unwrap()
    }

    #[test]
    fn scores_small_subtract_square_positions() {
        // 0, 2, 5, 7 and 10 are the losing positions below 11.
        let expected = [
            Score::Loss,
            Score::Win,
            Score::Loss,
            Score::Win,
            Score::Win,
            Score::Loss,
            Score::Win,
            Score::Loss,
            Score::Win,
            Score::Win,
            Score::Loss,
        ];
        for (value, expected) in expected.iter().enumerate() {
            assert_eq!(score_of(value as u32), *expected, "value {value}");
        }
    }

    #[test]
    fn score_does_not_depend_on_who_moves() {
        let game = SubtractSquare::new(Player::Two, 12);
        let state = SubtractSquareState::new(Player::Two, 12);

        let as_two = score(&game, &state, Player::Two, Player::One).unwrap();

        assert_eq!(as_two, score_of(12));
    }
}
