use crate::error::{Error, Result};
use crate::state::{Game, Player, State};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A position of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
/// A move is represented by a `u8` from 0 to 8. `Player::One` plays 'X' and always starts.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeState {
    current_player: Player,
    field: [Option<Player>; 9],
}

impl Default for TicTacToeState {
    /// Creates an empty board with 'X' to move.
    fn default() -> Self {
        Self {
            current_player: Player::One,
            field: [None; 9],
        }
    }
}

impl TicTacToeState {
    /// Returns the player who owns three cells in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = self.field[a]?;
            (self.field[b] == Some(owner) && self.field[c] == Some(owner)).then_some(owner)
        })
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.field.get(index).copied().flatten()
    }
}

impl State for TicTacToeState {
    type Move = u8;

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.winner().is_some() {
            return Vec::new();
        }

        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn apply_move(&self, mv: &Self::Move) -> Result<Self> {
        let index = *mv as usize;
        if self.winner().is_some() || self.cell(index).is_some() || index >= self.field.len() {
            return Err(Error::invalid_move(mv));
        }

        let mut next = *self;
        next.field[index] = Some(self.current_player);
        next.current_player = self.current_player.other();
        Ok(next)
    }

    fn current_player(&self) -> Player {
        self.current_player
    }
}

/// A Tic-Tac-Toe game in progress.
#[derive(Debug, Clone, Default)]
pub struct TicTacToe {
    current_state: TicTacToeState,
}

impl TicTacToe {
    /// Builds a game from nine cells written row by row as 'X', 'O' or '.'.
    ///
    /// The player to move is 'X' when both players own the same number of cells and 'O' when
    /// 'X' owns one more. Returns `None` for any other input.
    pub fn from_cells(cells: &str) -> Option<Self> {
        let mut field = [None; 9];
        let mut count = 0;
        for (i, c) in cells.chars().enumerate() {
            let cell = field.get_mut(i)?;
            *cell = match c {
                'X' => Some(Player::One),
                'O' => Some(Player::Two),
                '.' => None,
                _ => return None,
            };
            count += 1;
        }
        if count != field.len() {
            return None;
        }

        let x_count = field.iter().filter(|c| **c == Some(Player::One)).count();
        let o_count = field.iter().filter(|c| **c == Some(Player::Two)).count();
        let current_player = match x_count.checked_sub(o_count)? {
            0 => Player::One,
            1 => Player::Two,
            _ => return None,
        };
        Some(Self {
            current_state: TicTacToeState {
                current_player,
                field,
            },
        })
    }

    /// Plays `mv` for the player to move.
    pub fn play(&mut self, mv: u8) -> Result<()> {
        self.current_state = self.current_state.apply_move(&mv)?;
        Ok(())
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;

    fn current_state(&self) -> &TicTacToeState {
        &self.current_state
    }

    fn is_winner(&self, state: &TicTacToeState, player: Player) -> bool {
        state.winner() == Some(player)
    }
}
