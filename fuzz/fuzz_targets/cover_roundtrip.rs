#![no_main]

use exact_cover_dlx::{grid::Grid, Solver};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug)]
struct SmallInstance {
    num_items: u8,
    sets: Vec<Vec<u8>>,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallInstance {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_items = u.int_in_range(0..=8)?;
        let num_sets = u.int_in_range(0..=12u8)?;

        let mut sets = Vec::new();
        for _ in 0..num_sets {
            let mask = u.arbitrary::<u8>()?;
            sets.push((0..num_items).filter(|item| mask & (1 << item) != 0).collect());
        }

        Ok(SmallInstance { num_items, sets })
    }
}

fuzz_target!(|data: SmallInstance| {
    let universe: Vec<u8> = (0..data.num_items).collect();

    let mut grid = match Grid::build(universe.clone(), data.sets.clone()) {
        Ok(grid) => grid,
        Err(err) => panic!("sets are drawn from the universe: {}", err),
    };
    let original = grid.snapshot();

    for header in grid.headers().collect::<Vec<_>>() {
        for cell in grid.column(header).collect::<Vec<_>>() {
            grid.cover(cell);
            grid.uncover(cell);
            assert_eq!(grid.snapshot(), original);
        }
    }

    let mut solver = Solver::from_grid(grid);
    if let Some(rows) = solver.solve() {
        let mut covered = HashSet::new();
        for row in &rows {
            for item in &data.sets[row - 1] {
                assert!(covered.insert(*item));
            }
        }
        assert_eq!(covered.len(), universe.len());
    }
    let restored = solver.grid().map(Grid::snapshot);
    assert_eq!(restored.as_deref(), Some(original.as_slice()));
});
