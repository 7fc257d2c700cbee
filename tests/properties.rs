//! Randomized invariant checks for the game board.
//!
//! Plays seeded random drop sequences, including full-column and off-board
//! drops, and checks the board invariants after every call.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use piezas::board::{GameBoard, Piece, Player, Scoring, COLS, ROWS};
use piezas::protocol::{encode_position, parse_position};

const GAMES: u64 = 200;
const DROPS_PER_GAME: usize = 40;

fn cells(board: &GameBoard) -> Vec<Piece> {
    (0..ROWS as i32)
        .flat_map(|r| (0..COLS as i32).map(move |c| (r, c)))
        .map(|(r, c)| board.piece_at(r, c))
        .collect()
}

fn assert_gravity(board: &GameBoard) {
    for c in 0..COLS as i32 {
        let height = (0..ROWS as i32)
            .take_while(|&r| board.piece_at(r, c) != Piece::Blank)
            .count() as i32;
        for r in height..ROWS as i32 {
            assert_eq!(board.piece_at(r, c), Piece::Blank, "floating piece in column {}", c);
        }
    }
}

#[test]
fn random_play_keeps_invariants() {
    for seed in 0..GAMES {
        let mut rng = SmallRng::seed_from_u64(seed);
        let scoring = if seed % 2 == 0 {
            Scoring::LongestLine
        } else {
            Scoring::LeaderReset
        };
        let mut board = GameBoard::with_scoring(scoring);
        let mut expected_turn = Player::X;

        for _ in 0..DROPS_PER_GAME {
            let column = rng.gen_range(-2..COLS as i32 + 2);
            let before = cells(&board);
            assert_eq!(board.turn(), expected_turn);

            let result = board.drop_piece(column);
            let after = cells(&board);
            let changed: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();

            match result {
                Piece::Invalid => {
                    assert!(!(0..COLS as i32).contains(&column));
                    assert!(changed.is_empty());
                }
                Piece::Blank => {
                    assert!(changed.is_empty());
                    assert!((0..ROWS as i32).all(|r| board.piece_at(r, column) != Piece::Blank));
                }
                placed => {
                    assert_eq!(placed, expected_turn.piece());
                    assert_eq!(changed.len(), 1);
                    // Only a blank cell was written.
                    assert_eq!(before[changed[0]], Piece::Blank);
                    assert_eq!(changed[0] % COLS, column as usize);
                }
            }

            expected_turn = expected_turn.other();
            assert_gravity(&board);

            let state = board.game_state();
            if board.is_full() {
                assert!(matches!(state, Piece::X | Piece::O | Piece::Blank));
            } else {
                assert_eq!(state, Piece::Invalid);
            }

            let pos = parse_position(&encode_position(&board)).unwrap();
            assert!(pos.matches(&board));
        }
    }
}

#[test]
fn random_full_boards_longest_line_is_symmetric() {
    // Swapping the players' roles must swap the winner.
    for seed in 0..GAMES {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut columns = Vec::new();
        let mut board = GameBoard::new();
        while !board.is_full() {
            let column = rng.gen_range(0..COLS as i32);
            columns.push(column);
            board.drop_piece(column);
        }

        // Same drops with X forfeiting first: every mark flips owner.
        let mut mirrored = GameBoard::new();
        mirrored.drop_piece(-1);
        for &column in &columns {
            mirrored.drop_piece(column);
        }

        let expected = match board.game_state() {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
            other => other,
        };
        assert_eq!(mirrored.game_state(), expected, "seed {}", seed);
    }
}

#[test]
fn reset_after_random_play_matches_new_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = GameBoard::new();
    for _ in 0..DROPS_PER_GAME {
        board.drop_piece(rng.gen_range(-1..COLS as i32 + 1));
        board.reset();
        assert_eq!(board, GameBoard::new());
        assert_eq!(board.drop_piece(0), Piece::X);
    }
}
