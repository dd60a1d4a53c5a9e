use crate::{ExactCover, Item};

/// A generic exact cover problem, given directly as a universe and a list of
/// candidate sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T> {
    /// The items that must each be covered exactly once.
    pub universe: Vec<T>,
    /// The candidate sets, in row order.
    pub sets: Vec<Vec<T>>,
}

impl<T> Problem<T> {
    /// Create a new problem.
    pub fn new(universe: Vec<T>, sets: Vec<Vec<T>>) -> Self {
        Problem { universe, sets }
    }
}

impl<T> ExactCover for Problem<T>
where
    T: Item,
{
    type Item = T;
    /// The selected candidate sets, in selection order.
    type Solution = Vec<Vec<T>>;

    fn universe(&self) -> &[T] {
        &self.universe
    }

    fn sets(&self) -> &[Vec<T>] {
        &self.sets
    }

    fn decode(&self, rows: &[usize]) -> Self::Solution {
        rows.iter().map(|row| self.sets[row - 1].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn decodes_selected_sets() {
        let problem = Problem::new(
            vec![1, 2, 3, 4],
            vec![vec![1], vec![2, 4], vec![1, 3], vec![3]],
        );

        assert_eq!(problem.solve(), Some(vec![vec![1], vec![2, 4], vec![3]]));
    }

    #[test]
    fn solution_partitions_universe() {
        let problem = Problem::new(
            vec!['p', 'q', 'r', 's', 't'],
            vec![
                vec!['p', 'q'],
                vec!['r', 's', 't'],
                vec!['q', 'r'],
                vec!['p'],
                vec!['s', 't'],
            ],
        );

        let solution = problem.solve().unwrap();
        let covered: Vec<char> = solution.into_iter().flatten().collect();
        let unique: HashSet<char> = covered.iter().copied().collect();

        assert_eq!(covered.len(), unique.len());
        assert_eq!(unique, problem.universe.iter().copied().collect::<HashSet<_>>());
    }

    #[test]
    fn unknown_item_has_no_solution() {
        let problem = Problem::new(vec!["a"], vec![vec!["a"], vec!["b"]]);

        assert!(problem.solver().construction_error().is_some());
        assert_eq!((&problem).solve(), None);
    }
}
