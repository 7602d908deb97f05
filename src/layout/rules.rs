//! Layout validation rules using Validation.

use super::violations::LayoutViolation;
use super::RawLayout;
use crate::core::{can_drop, Position, GRID_SIZE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<LayoutViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> LayoutViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate a raw layout, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the layout describes a
/// `GRID_SIZE` x `GRID_SIZE` grid whose every stack could have been built by
/// legal drops, with a start position on the grid.
pub fn validate(raw: &RawLayout) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    let columns = raw.grid.len();
    checks.push(check(columns == GRID_SIZE, || {
        LayoutViolation::ColumnCount { found: columns }
    }));

    for (x, column) in raw.grid.iter().enumerate() {
        let rows = column.len();
        checks.push(check(rows == GRID_SIZE, || LayoutViolation::RowCount {
            x,
            found: rows,
        }));

        for (y, stack) in column.iter().enumerate() {
            for i in 1..stack.len() {
                checks.push(check(can_drop(&stack[..i], stack[i]), || {
                    LayoutViolation::IllegalStack {
                        position: Position::new(x, y),
                        below: stack[i - 1],
                        above: stack[i],
                    }
                }));
            }
        }
    }

    checks.push(check(raw.start.in_bounds(), || {
        LayoutViolation::StartOutOfBounds { start: raw.start }
    }));

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Disc::{self, Blue, Green, Red};

    fn raw(grid: Vec<Vec<Vec<Disc>>>, start: Position) -> RawLayout {
        RawLayout { grid, start }
    }

    fn square() -> Vec<Vec<Vec<Disc>>> {
        vec![vec![vec![]; GRID_SIZE]; GRID_SIZE]
    }

    fn violations(result: Check) -> Vec<LayoutViolation> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn empty_square_grid_is_valid() {
        assert!(validate(&raw(square(), Position::new(0, 0))).is_success());
    }

    #[test]
    fn legal_towers_are_valid() {
        let mut grid = square();
        grid[1][1] = vec![Green, Green, Blue, Red];
        grid[2][0] = vec![Blue, Red];
        assert!(validate(&raw(grid, Position::new(2, 2))).is_success());
    }

    #[test]
    fn illegal_stack_is_reported_with_its_position() {
        let mut grid = square();
        grid[0][2] = vec![Red, Green];

        let found = violations(validate(&raw(grid, Position::new(0, 0))));

        assert_eq!(
            found,
            vec![LayoutViolation::IllegalStack {
                position: Position::new(0, 2),
                below: Red,
                above: Green,
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut grid = square();
        grid.pop();
        grid[0].push(vec![]);
        grid[1][0] = vec![Blue, Blue];

        let found = violations(validate(&raw(grid, Position::new(5, 0))));

        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|v| matches!(v, LayoutViolation::ColumnCount { found: 2 })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LayoutViolation::RowCount { x: 0, found: 4 })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LayoutViolation::IllegalStack { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LayoutViolation::StartOutOfBounds { .. })));
    }
}
