mod common;

use common::init_logging;
use exact_cover_dlx::{sudoku::Sudoku, ExactCover, MinimumRemaining};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

const SOLVED_SUDOKUS: [&str; 3] = [
    "296318547158647293374259861863194725519723486742865319427931658681572934935486172",
    "351786924697342185428915637569134872742859316813267549935471268284693751176528493",
    "123456789456789123789123456214365897365897214897214365531642978642978531978531642",
];

#[test]
fn single_sudoku_test() {
    init_logging();

    let sudoku_input =
        "006008047000607200304009060003100005010020480740005009020930600081000034905006170";
    let expected_solved_sudoku =
        "296318547158647293374259861863194725519723486742865319427931658681572934935486172";

    let puzzle: Sudoku = sudoku_input.parse().unwrap();
    let board = puzzle.solve().unwrap();

    assert_eq!(board.to_digit_string(), expected_solved_sudoku);
}

#[test]
fn completed_sudoku_decodes_to_itself() {
    for solved in SOLVED_SUDOKUS {
        let puzzle: Sudoku = solved.parse().unwrap();
        assert_eq!(puzzle.possibilities.len(), 81);

        let mut solver = puzzle.solver();
        let rows = solver.solve().unwrap();
        assert_eq!(rows.len(), 81);

        let board = puzzle.decode(&rows);
        assert_eq!(board.to_digit_string(), solved);
        assert!(board.is_solved());
    }
}

#[test]
fn empty_sudoku_is_filled() {
    let puzzle: Sudoku = "0".repeat(81).parse().unwrap();

    let board = puzzle.solve().unwrap();
    assert!(board.is_solved());
    assert_eq!(board.to_digit_string(), SOLVED_SUDOKUS[2]);

    let rows = puzzle
        .solver()
        .with_policy(MinimumRemaining)
        .solve()
        .unwrap();
    assert!(puzzle.decode(&rows).is_solved());
}

#[test]
fn masked_sudokus_keep_their_givens() {
    init_logging();

    let puzzles: Vec<String> = SOLVED_SUDOKUS
        .iter()
        .enumerate()
        .flat_map(|(index, solved)| {
            (0..8u64).map(move |seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed * 31 + index as u64);
                solved
                    .chars()
                    .map(|c| if rng.random_bool(0.6) { '0' } else { c })
                    .collect()
            })
        })
        .collect();

    puzzles.par_iter().for_each(|puzzle_input| {
        let puzzle: Sudoku = puzzle_input.parse().unwrap();
        let rows = puzzle
            .solver()
            .with_policy(MinimumRemaining)
            .solve()
            .unwrap_or_else(|| panic!("no solution for [{}]", puzzle_input));
        let board = puzzle.decode(&rows);

        assert!(board.is_solved(), "invalid solution for [{}]", puzzle_input);
        for (given, value) in puzzle_input.chars().zip(board.values()) {
            if let Some(given) = given.to_digit(10).filter(|digit| *digit != 0) {
                assert_eq!(given as usize, *value);
            }
        }
    });
}

#[test]
fn invalid_boards_are_rejected() {
    assert_eq!(
        "12".parse::<Sudoku>().unwrap_err().to_string(),
        "invalid board length, expected 81 cells but received 2"
    );

    let mut input = "0".repeat(80);
    input.push('.');
    assert_eq!(
        input.parse::<Sudoku>().unwrap_err().to_string(),
        "invalid cell value '.' at position 80"
    );
}
