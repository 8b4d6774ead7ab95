//! Scoring tests on a three-cell game with a single move type.

use minimax_lib::error::{Error, Result};
use minimax_lib::negamax::{iterative, recursive};
use minimax_lib::selector::{iterative_select_move, recursive_select_move};
use minimax_lib::state::{Game, Player, Score, State};

/// Three cells filled left to right; the only move fills the next empty cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellsState {
    filled: u8,
    current_player: Player,
}

impl State for CellsState {
    type Move = u8;

    fn get_possible_moves(&self) -> Vec<u8> {
        if self.filled < 3 { vec![self.filled] } else { vec![] }
    }

    fn apply_move(&self, mv: &u8) -> Result<Self> {
        if *mv != self.filled || self.filled >= 3 {
            return Err(Error::invalid_move(mv));
        }
        Ok(CellsState {
            filled: self.filled + 1,
            current_player: self.current_player.other(),
        })
    }

    fn current_player(&self) -> Player {
        self.current_player
    }
}

/// A game over `CellsState` where `winner` is flagged once all cells are filled.
struct Cells {
    state: CellsState,
    winner: Option<Player>,
}

impl Cells {
    fn new(filled: u8, current_player: Player, winner: Option<Player>) -> Self {
        Self {
            state: CellsState {
                filled,
                current_player,
            },
            winner,
        }
    }

    fn scores(&self) -> (Score, Score) {
        let player = self.state.current_player;
        let recursive = recursive::score(self, &self.state, player, player.other()).unwrap();
        let iterative = iterative::score(self, &self.state, player, player.other()).unwrap();
        (recursive, iterative)
    }
}

impl Game for Cells {
    type State = CellsState;

    fn current_state(&self) -> &CellsState {
        &self.state
    }

    fn is_winner(&self, state: &CellsState, player: Player) -> bool {
        self.is_over(state) && self.winner == Some(player)
    }
}

#[test]
fn terminal_state_with_a_winner_is_a_loss() {
    let game = Cells::new(3, Player::Two, Some(Player::One));
    assert_eq!(game.scores(), (Score::Loss, Score::Loss));

    let game = Cells::new(3, Player::Two, Some(Player::Two));
    assert_eq!(game.scores(), (Score::Loss, Score::Loss));
}

#[test]
fn terminal_state_without_a_winner_is_a_draw() {
    let game = Cells::new(3, Player::One, None);
    assert_eq!(game.scores(), (Score::Draw, Score::Draw));
}

#[test]
fn move_into_a_win_for_the_mover_scores_one() {
    // One fills the last cell and is flagged as the winner.
    let game = Cells::new(2, Player::One, Some(Player::One));

    let (recursive, iterative) = game.scores();

    assert_eq!(recursive.value(), 1);
    assert_eq!(iterative.value(), 1);
}

#[test]
fn forced_line_into_an_opponent_win_scores_minus_one() {
    // One fills the second cell, Two fills the last one and is flagged as the winner.
    let game = Cells::new(1, Player::One, Some(Player::Two));

    let (recursive, iterative) = game.scores();

    assert_eq!(recursive.value(), -1);
    assert_eq!(iterative.value(), -1);
}

#[test]
fn move_into_a_drawn_position_scores_zero() {
    let game = Cells::new(2, Player::Two, None);
    assert_eq!(game.scores(), (Score::Draw, Score::Draw));
}

#[test]
fn selectors_return_the_only_move() {
    let game = Cells::new(0, Player::One, Some(Player::One));

    assert_eq!(recursive_select_move(&game), Ok(0));
    assert_eq!(iterative_select_move(&game), Ok(0));
}

/// Lists a move its state refuses to apply.
#[derive(Debug, Clone)]
struct BrokenState;

impl State for BrokenState {
    type Move = &'static str;

    fn get_possible_moves(&self) -> Vec<&'static str> {
        vec!["jump"]
    }

    fn apply_move(&self, mv: &&'static str) -> Result<Self> {
        Err(Error::invalid_move(mv))
    }

    fn current_player(&self) -> Player {
        Player::One
    }
}

struct Broken(BrokenState);

impl Game for Broken {
    type State = BrokenState;

    fn current_state(&self) -> &BrokenState {
        &self.0
    }

    fn is_winner(&self, _state: &BrokenState, _player: Player) -> bool {
        false
    }
}

#[test]
fn invalid_moves_propagate_to_the_caller() {
    let game = Broken(BrokenState);
    let expected = Err(Error::InvalidMove {
        mv: "\"jump\"".to_string(),
    });

    assert_eq!(recursive_select_move(&game), expected);
    assert_eq!(iterative_select_move(&game), expected);
}
