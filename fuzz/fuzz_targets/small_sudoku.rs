#![no_main]

use exact_cover_dlx::{
    sudoku::{Possibility, Sudoku},
    ExactCover, MinimumRemaining,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct Sudoku4x4Input {
    filled_entries: Vec<Possibility>,
}

impl<'a> arbitrary::Arbitrary<'a> for Sudoku4x4Input {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let filled_entries = u
            .arbitrary::<[u8; 16]>()?
            .into_iter()
            .map(usize::from)
            .enumerate()
            .filter_map(|(index, value)| {
                let row = index / 4;
                let column = index % 4;
                let value = value % 5;

                if value == 0 {
                    None
                } else {
                    Some(Possibility::new(row, column, value, 2))
                }
            })
            .collect();

        Ok(Sudoku4x4Input { filled_entries })
    }
}

fuzz_target!(|data: Sudoku4x4Input| {
    let puzzle_4x4 = Sudoku::new(2, data.filled_entries.iter().copied());

    let first = puzzle_4x4.solver().solve();
    let mrv = puzzle_4x4.solver().with_policy(MinimumRemaining).solve();
    assert_eq!(first.is_some(), mrv.is_some());

    for rows in first.iter().chain(mrv.iter()) {
        let board = puzzle_4x4.decode(rows);
        assert!(board.is_solved());
        for given in &data.filled_entries {
            assert_eq!(board.get(given.row, given.column), given.value);
        }
    }
});
