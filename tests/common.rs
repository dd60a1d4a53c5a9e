use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Install a logger once per test binary, honouring `RUST_LOG`.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a universe of up to 6 items and up to 9 candidate sets, every set
/// drawn from the universe.
#[allow(dead_code)]
pub fn random_problem(seed: u64) -> (Vec<u8>, Vec<Vec<u8>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let num_items = rng.random_range(1..=6u8);
    let num_sets = rng.random_range(1..=9usize);

    let universe: Vec<u8> = (0..num_items).collect();
    let sets = (0..num_sets)
        .map(|_| {
            universe
                .iter()
                .copied()
                .filter(|_| rng.random_bool(1.0 / 3.0))
                .collect()
        })
        .collect();

    (universe, sets)
}

/// Return true if some selection of the sets partitions the universe, by
/// trying every subset of rows.
#[allow(dead_code)]
pub fn brute_force_exists(universe: &[u8], sets: &[Vec<u8>]) -> bool {
    let target: HashSet<u8> = universe.iter().copied().collect();

    (0u32..1 << sets.len()).any(|mask| {
        let mut covered = HashSet::new();
        let disjoint = sets
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .flat_map(|(_, set)| set.iter().copied())
            .all(|item| covered.insert(item));

        disjoint && covered == target
    })
}

/// Panic unless the 1-based `rows` select sets that cover every item of the
/// universe exactly once.
#[allow(dead_code)]
pub fn assert_partition<T>(universe: &[T], sets: &[Vec<T>], rows: &[usize])
where
    T: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    let mut covered = HashSet::new();
    for row in rows {
        for item in &sets[row - 1] {
            assert!(
                covered.insert(item.clone()),
                "item [{:?}] covered twice by rows {:?}",
                item,
                rows
            );
        }
    }

    let target: HashSet<T> = universe.iter().cloned().collect();
    assert_eq!(covered, target, "rows {:?} do not cover the universe", rows);
}
