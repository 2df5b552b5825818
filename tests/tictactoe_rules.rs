//! Test suite for the Tic-Tac-Toe rules
//! Validates turn order, transition legality and terminal scoring

mod common;

use alphabeta::{
    BoardState, Error, Player,
    tictactoe::{Action, Cell, actions, initial_state, player, result, terminal, utility, winner},
};
use rand::{SeedableRng, rngs::StdRng};

fn at(row: usize, col: usize) -> Action {
    Action::new(row, col).unwrap()
}

mod turn_order {
    use super::*;

    #[test]
    fn x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn player_alternates_along_random_games() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (boards, _) = common::random_game(&mut rng);
            for pair in boards.windows(2) {
                assert_ne!(player(&pair[0]), player(&pair[1]));
            }
        }
    }

    #[test]
    fn counts_stay_balanced() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let (boards, _) = common::random_game(&mut rng);
            for board in boards {
                let x = board.cells().iter().filter(|&&c| c == Cell::X).count();
                let o = board.cells().iter().filter(|&&c| c == Cell::O).count();
                assert!(x == o || x == o + 1, "bad counts on {}", board.encode());
            }
        }
    }

    #[test]
    fn every_legal_action_flips_the_player() {
        let board = BoardState::from_string("XO.|.X.|...").unwrap();
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_ne!(player(&next), player(&board));
        }
    }
}

mod transitions {
    use super::*;

    #[test]
    fn second_placement_on_a_cell_fails() {
        let board = result(&initial_state(), at(2, 1)).unwrap();
        let err = result(&board, at(2, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 2, col: 1 }));
    }

    #[test]
    fn result_places_the_movers_mark() {
        let board = BoardState::from_string("X........").unwrap();
        let next = result(&board, at(1, 1)).unwrap();
        assert_eq!(next.get(at(1, 1)), Cell::O);
        assert_eq!(next.occupied_count(), 2);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn actions_are_exactly_the_empty_cells() {
        let board = BoardState::from_string("X.O|.X.|O..").unwrap();
        let listed: Vec<usize> = actions(&board).into_iter().map(Action::index).collect();
        assert_eq!(listed, vec![1, 3, 5, 7, 8]);
    }
}

mod terminal_states {
    use super::*;

    #[test]
    fn utility_matches_winner_on_finished_games() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..300 {
            let (boards, _) = common::random_game(&mut rng);
            let last = boards.last().unwrap();
            assert!(terminal(last));
            let expected = match winner(last) {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            assert_eq!(utility(last), expected);
        }
    }

    #[test]
    fn only_the_final_board_is_terminal() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..100 {
            let (boards, _) = common::random_game(&mut rng);
            let (last, rest) = boards.split_last().unwrap();
            assert!(terminal(last));
            assert!(rest.iter().all(|b| !terminal(b)));
        }
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = BoardState::from_string("XOX|XOO|OXX").unwrap();
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn win_with_empty_cells_is_terminal() {
        let board = BoardState::from_string("XXX|OO.|...").unwrap();
        assert!(terminal(&board));
        assert!(!actions(&board).is_empty());
        assert_eq!(utility(&board), 1);
    }
}
