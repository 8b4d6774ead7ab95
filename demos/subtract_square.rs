extern crate minimax_lib;

use log::info;
use minimax_lib::games::subtract_square::SubtractSquare;
use minimax_lib::selector::{MoveSelector, Strategy};
use minimax_lib::state::{Game, Player, State};
use rand::Rng;

fn main() {
    env_logger::init();
    let mut rng = rand::rng();

    // Start from a random number with the engine moving first
    let start = rng.random_range(10..30);
    let mut game = SubtractSquare::new(Player::One, start);
    println!("Starting from {start}");

    // Create a new move selector for the engine
    let selector = MoveSelector::builder()
        .with_strategy(Strategy::Iterative)
        .build();

    // Alternate engine moves with random replies until nobody can move
    while !game.is_over(game.current_state()) {
        let state = *game.current_state();
        let mv = match state.current_player() {
            Player::One => selector.select_move(&game).expect("game is not over"),
            Player::Two => {
                let moves = state.get_possible_moves();
                moves[rng.random_range(0..moves.len())]
            }
        };
        info!("{:?} subtracts {mv} from {}", state.current_player(), state.value());
        game.play(mv).expect("selected move is legal");
        println!("{:?} subtracts {mv}. {}", state.current_player(), game.current_state());
    }

    // Print the winner
    let state = game.current_state();
    let winner = [Player::One, Player::Two]
        .into_iter()
        .find(|player| game.is_winner(state, *player));
    println!("The winner is: {:?}", winner);
}

