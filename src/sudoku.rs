//! A [Sudoku puzzle](https://en.wikipedia.org/wiki/Sudoku) is a
//! `n^2` × `n^2` array with sub-arrays of size `n` × `n`. Each row, column, and
//! sub-array contains the values `1` through `n^2` with no repeats.

use crate::ExactCover;
use core::{fmt, str::FromStr};
use thiserror::Error;

/// Reasons a Sudoku puzzle string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// The input does not have one character per cell.
    #[error("invalid board length, expected {expected} cells but received {actual}")]
    InvalidLength {
        /// Number of cells on the board.
        expected: usize,
        /// Number of characters received.
        actual: usize,
    },
    /// A character is not a digit between `0` and the side length.
    #[error("invalid cell value {symbol:?} at position {index}")]
    InvalidSymbol {
        /// The 0-based position of the character in the input.
        index: usize,
        /// The offending character.
        symbol: char,
    },
    /// Only boards whose values fit in a single digit can be parsed.
    #[error("unsupported box side length {0}, expected 1 to 3")]
    UnsupportedBoxSize(usize),
}

/// An instance of a Sudoku puzzle, encoded as an exact cover problem.
#[derive(Debug, Clone)]
pub struct Sudoku {
    box_side_length: usize,
    /// The values and positions that are given as fixed when the puzzle is
    /// created.
    pub filled_values: Vec<Possibility>,
    /// One entry per candidate set, in row order.
    pub possibilities: Vec<Possibility>,
    /// The universe of the problem.
    pub constraints: Vec<Constraint>,
    sets: Vec<Vec<Constraint>>,
}

impl Sudoku {
    /// Create a new Sudoku puzzle.
    ///
    /// The puzzle has size `n^2` × `n^2` (where `n = box_side_length`) and the
    /// given list of filled values. A filled cell only admits its given value,
    /// every other cell admits all values. If a cell is given more than once,
    /// the last value wins.
    ///
    /// # Panics
    ///
    /// Panics if a filled value lies outside the board.
    pub fn new(box_side_length: usize, filled_values: impl IntoIterator<Item = Possibility>) -> Self {
        let side_length = box_side_length * box_side_length;
        let mut givens = vec![None; side_length * side_length];

        let filled_values: Vec<_> = filled_values
            .into_iter()
            .inspect(|poss| {
                debug_assert!(
                    0 < poss.value && poss.value <= side_length,
                    "Symbol values should be in range (1..=side_length)"
                );
                assert!(
                    poss.row < side_length && poss.column < side_length,
                    "Filled value position ({}, {}) should be on the board",
                    poss.row,
                    poss.column
                );
            })
            .collect();
        for poss in &filled_values {
            givens[poss.row * side_length + poss.column] = Some(poss.value);
        }

        let possibilities: Vec<_> = givens
            .iter()
            .enumerate()
            .flat_map(|(index, given)| {
                let row = index / side_length;
                let column = index % side_length;
                let values = match *given {
                    Some(value) => value..=value,
                    None => 1..=side_length,
                };

                values.map(move |value| Possibility::new(row, column, value, box_side_length))
            })
            .collect();

        let sets = possibilities
            .iter()
            .map(|poss| poss.satisfied_constraints().collect())
            .collect();

        log::debug!(
            "Encoded sudoku with [{}] filled values into [{}] possibilities.",
            filled_values.len(),
            possibilities.len()
        );

        Sudoku {
            box_side_length,
            filled_values,
            possibilities,
            constraints: Constraint::all(box_side_length).collect(),
            sets,
        }
    }

    /// Parse a Sudoku puzzle from a string.
    ///
    /// # Expected Format
    ///  - 0 denotes an empty value
    ///  - The numbers are presented in row-major order. So the first
    ///    `side_length` numbers are the first row, the next `side_length`
    ///    numbers are the second row, etc.
    pub fn parse(input: &str, box_side_length: usize) -> Result<Self, SudokuError> {
        if !(1..=3).contains(&box_side_length) {
            return Err(SudokuError::UnsupportedBoxSize(box_side_length));
        }

        let side_length = box_side_length * box_side_length;
        let actual = input.chars().count();
        if actual != side_length * side_length {
            return Err(SudokuError::InvalidLength {
                expected: side_length * side_length,
                actual,
            });
        }

        let mut filled_values = Vec::new();
        for (index, symbol) in input.chars().enumerate() {
            let value = symbol
                .to_digit(10)
                .map(|value| value as usize)
                .filter(|value| *value <= side_length)
                .ok_or(SudokuError::InvalidSymbol { index, symbol })?;

            if value != 0 {
                filled_values.push(Possibility::new(
                    index / side_length,
                    index % side_length,
                    value,
                    box_side_length,
                ));
            }
        }

        log::debug!(
            "Parsed sudoku puzzle input [{}] for side length [{}].",
            input,
            side_length
        );

        Ok(Sudoku::new(box_side_length, filled_values))
    }

    /// Return the length of a side of the board.
    pub fn side_length(&self) -> usize {
        self.box_side_length * self.box_side_length
    }
}

impl FromStr for Sudoku {
    type Err = SudokuError;

    /// Parse a standard 9 × 9 puzzle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sudoku::parse(s, 3)
    }
}

impl ExactCover for Sudoku {
    type Item = Constraint;
    type Solution = Board;

    fn universe(&self) -> &[Constraint] {
        &self.constraints
    }

    fn sets(&self) -> &[Vec<Constraint>] {
        &self.sets
    }

    fn decode(&self, rows: &[usize]) -> Board {
        let mut board = Board::empty(self.side_length());
        for row in rows {
            let poss = self.possibilities[row - 1];
            board.values[poss.row * board.side_length + poss.column] = poss.value;
        }

        board
    }
}

/// A position and value for a box inside of a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Possibility {
    /// The row position of the box.
    ///
    /// The values ranges from 0 to `n - 1`, where `n` is the length of the
    /// Sudoku board.
    pub row: usize,

    /// The column position of the box.
    ///
    /// The values ranges from 0 to `n - 1`, where `n` is the length of the
    /// Sudoku board.
    pub column: usize,

    /// The index of the subgrid, counted in row-major order.
    ///
    /// This field is redundant in identifying where the box is inside of the
    /// Sudoku board, however it saves recomputing it for every constraint.
    pub square: usize,

    /// The value present inside of the box.
    ///
    /// The values ranges from 1 to `n`, where `n` is the length of the
    /// Sudoku board.
    pub value: usize,
}

impl Possibility {
    /// Create a `Possibility` on a board with the given box side length.
    pub fn new(row: usize, column: usize, value: usize, box_side_length: usize) -> Self {
        let square = (row / box_side_length) * box_side_length + column / box_side_length;

        Possibility {
            row,
            column,
            square,
            value,
        }
    }

    /// Return an iterator over the `Constraint`s that are satisfied by this
    /// `Possibility`.
    pub fn satisfied_constraints(self) -> impl Iterator<Item = Constraint> {
        [
            Constraint::RowColumn {
                row: self.row,
                column: self.column,
            },
            Constraint::RowNumber {
                row: self.row,
                value: self.value,
            },
            Constraint::ColumnNumber {
                column: self.column,
                value: self.value,
            },
            Constraint::SquareNumber {
                square: self.square,
                value: self.value,
            },
        ]
        .into_iter()
    }
}

/// A condition which must be satisfied in order to solve a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// A condition that each cell holds exactly one value.
    RowColumn {
        /// The row index.
        row: usize,
        /// The column index.
        column: usize,
    },
    /// A condition that each row holds each value exactly once.
    RowNumber {
        /// The row index.
        row: usize,
        /// The unique numeric value.
        value: usize,
    },
    /// A condition that each column holds each value exactly once.
    ColumnNumber {
        /// The column index.
        column: usize,
        /// The unique numeric value.
        value: usize,
    },
    /// A condition that each square (or sub-grid) should only have a single
    /// instance of a numeric value.
    SquareNumber {
        /// The square index.
        square: usize,
        /// The unique numeric value.
        value: usize,
    },
}

impl Constraint {
    /// Return every constraint of a board with the given box side length:
    /// cells first, then row, column and square values.
    pub fn all(box_side_length: usize) -> impl Iterator<Item = Constraint> {
        let side_length = box_side_length * box_side_length;
        let cells = (0..side_length)
            .flat_map(move |row| (0..side_length).map(move |column| (row, column)));
        let values = move || {
            (0..side_length)
                .flat_map(move |index| (1..=side_length).map(move |value| (index, value)))
        };

        cells
            .map(|(row, column)| Constraint::RowColumn { row, column })
            .chain(values().map(|(row, value)| Constraint::RowNumber { row, value }))
            .chain(values().map(|(column, value)| Constraint::ColumnNumber { column, value }))
            .chain(values().map(|(square, value)| Constraint::SquareNumber { square, value }))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::RowColumn { row, column } => write!(f, "CELL ({},{})", row + 1, column + 1),
            Constraint::RowNumber { row, value } => write!(f, "ROW {} - NUM {}", row + 1, value),
            Constraint::ColumnNumber { column, value } => {
                write!(f, "COL {} - NUM {}", column + 1, value)
            }
            Constraint::SquareNumber { square, value } => {
                write!(f, "BOX {} - NUM {}", square, value)
            }
        }
    }
}

/// The values of a Sudoku board, `0` marking an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side_length: usize,
    values: Vec<usize>,
}

impl Board {
    fn empty(side_length: usize) -> Self {
        Board {
            side_length,
            values: vec![0; side_length * side_length],
        }
    }

    /// Return the value at the given position.
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.values[row * self.side_length + column]
    }

    /// Return the values in row-major order.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Format the board in the same layout accepted by [`Sudoku::parse`].
    pub fn to_digit_string(&self) -> String {
        self.values.iter().map(|value| value.to_string()).collect()
    }

    /// Return true if every row, column and square holds each value exactly
    /// once.
    pub fn is_solved(&self) -> bool {
        let side_length = self.side_length;
        let box_side_length = (1..=side_length)
            .find(|n| n * n == side_length)
            .unwrap_or(0);
        if box_side_length == 0 {
            return side_length == 0;
        }

        let mut groups = (0..side_length).flat_map(|index| {
            let row: Vec<_> = (0..side_length).map(|column| (index, column)).collect();
            let column: Vec<_> = (0..side_length).map(|row| (row, index)).collect();
            let square: Vec<_> = (0..side_length)
                .map(|offset| {
                    (
                        (index / box_side_length) * box_side_length + offset / box_side_length,
                        (index % box_side_length) * box_side_length + offset % box_side_length,
                    )
                })
                .collect();

            [row, column, square]
        });

        groups.all(|group| {
            let mut seen = vec![false; side_length + 1];
            group.into_iter().all(|(row, column)| {
                let value = self.get(row, column);
                (1..=side_length).contains(&value) && !std::mem::replace(&mut seen[value], true)
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.values.chunks(self.side_length.max(1)) {
            let line: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::iter;

    /// The 4 × 4 puzzle with only the middle four cells missing.
    pub(crate) const SMALL_PUZZLE: &str = "1234300220034321";
    pub(crate) const SMALL_SOLUTION: &str = "1234341221434321";

    fn p(row: usize, column: usize, square: usize, value: usize) -> Possibility {
        Possibility {
            row,
            column,
            square,
            value,
        }
    }

    #[test]
    fn check_generated_possibilities_constraints() {
        let sudoku = Sudoku::parse(SMALL_PUZZLE, 2).unwrap();

        assert_eq!(sudoku.filled_values.len(), 12);
        assert_eq!(sudoku.possibilities.len(), 12 + 4 * 4);
        assert_eq!(&sudoku.possibilities[..2], &[p(0, 0, 0, 1), p(0, 1, 0, 2)]);
        assert_eq!(
            &sudoku.possibilities[5..9],
            &[p(1, 1, 0, 1), p(1, 1, 0, 2), p(1, 1, 0, 3), p(1, 1, 0, 4)]
        );
        assert_eq!(sudoku.constraints.len(), 4 * 16);
        assert_eq!(
            sudoku.sets()[5],
            vec![
                Constraint::RowColumn { row: 1, column: 1 },
                Constraint::RowNumber { row: 1, value: 1 },
                Constraint::ColumnNumber {
                    column: 1,
                    value: 1
                },
                Constraint::SquareNumber {
                    square: 0,
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn universe_order_is_cells_rows_columns_squares() {
        let constraints: Vec<_> = Constraint::all(2).collect();

        assert_eq!(constraints[0], Constraint::RowColumn { row: 0, column: 0 });
        assert_eq!(constraints[15], Constraint::RowColumn { row: 3, column: 3 });
        assert_eq!(constraints[16], Constraint::RowNumber { row: 0, value: 1 });
        assert_eq!(
            constraints[32],
            Constraint::ColumnNumber {
                column: 0,
                value: 1
            }
        );
        assert_eq!(
            constraints[63],
            Constraint::SquareNumber {
                square: 3,
                value: 4
            }
        );
    }

    #[test]
    fn solve_small_sudoku() {
        let sudoku = Sudoku::parse(SMALL_PUZZLE, 2).unwrap();

        let board = sudoku.solve().unwrap();
        assert_eq!(board.to_digit_string(), SMALL_SOLUTION);
        assert!(board.is_solved());
    }

    #[test]
    fn solve_empty_small_sudoku() {
        let sudoku = Sudoku::new(2, iter::empty());

        let board = sudoku.solve().unwrap();
        assert!(board.is_solved());
        assert_eq!(board.to_digit_string(), "1234341221434321");
    }

    #[test]
    #[should_panic(expected = "Filled value position (4, 0) should be on the board")]
    fn filled_value_off_the_board_panics() {
        Sudoku::new(2, [Possibility::new(4, 0, 1, 2)]);
    }

    #[test]
    fn conflicting_givens_have_no_solution() {
        let sudoku = Sudoku::parse("1100000000000000", 2).unwrap();

        assert_eq!(sudoku.solve(), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "123".parse::<Sudoku>().unwrap_err(),
            SudokuError::InvalidLength {
                expected: 81,
                actual: 3
            }
        );
        assert_eq!(
            Sudoku::parse("12345x0000000000", 2).unwrap_err(),
            SudokuError::InvalidSymbol {
                index: 5,
                symbol: 'x'
            }
        );
        assert_eq!(
            Sudoku::parse("1250000000000000", 2).unwrap_err(),
            SudokuError::InvalidSymbol {
                index: 2,
                symbol: '5'
            }
        );
        assert_eq!(
            Sudoku::parse("", 4).unwrap_err(),
            SudokuError::UnsupportedBoxSize(4)
        );
    }

    #[test]
    fn board_display() {
        let sudoku = Sudoku::parse(SMALL_PUZZLE, 2).unwrap();
        let board = sudoku.solve().unwrap();

        assert_eq!(board.to_string(), "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n");
        assert_eq!(board.get(1, 2), 1);
    }

    #[test]
    fn constraint_display() {
        assert_eq!(
            Constraint::RowColumn { row: 0, column: 8 }.to_string(),
            "CELL (1,9)"
        );
        assert_eq!(
            Constraint::SquareNumber {
                square: 4,
                value: 7
            }
            .to_string(),
            "BOX 4 - NUM 7"
        );
    }
}
