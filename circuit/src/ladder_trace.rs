//! Trace builder and native constraint checker for the scalar multiplication
//! ladder.
//!
//! One row per scalar bit, least significant first. Each row holds the
//! accumulator, the current base `2^i * P`, the bit, and the results of the
//! conditional addition and the doubling together with their slopes, so that
//! every constraint below is a low-degree equation over the coordinate field.

use curve::{BaseField, CurveError, Point, LADDER_BITS};
use p3_matrix::{dense::RowMajorMatrix, Matrix};
use tracing::{debug, trace};

use crate::errors::TraceError;

pub const ACC_INF_COL: usize = 0;
pub const ACC_X_COL: usize = ACC_INF_COL + 1;
pub const ACC_Y_COL: usize = ACC_X_COL + 1;
pub const BASE_X_COL: usize = ACC_Y_COL + 1;
pub const BASE_Y_COL: usize = BASE_X_COL + 1;
pub const BIT_COL: usize = BASE_Y_COL + 1;
pub const ADD_X_COL: usize = BIT_COL + 1;
pub const ADD_Y_COL: usize = ADD_X_COL + 1;
pub const ADD_SLOPE_COL: usize = ADD_Y_COL + 1;
pub const DOUBLE_X_COL: usize = ADD_SLOPE_COL + 1;
pub const DOUBLE_Y_COL: usize = DOUBLE_X_COL + 1;
pub const DOUBLE_SLOPE_COL: usize = DOUBLE_Y_COL + 1;
pub const NUM_COLUMNS: usize = DOUBLE_SLOPE_COL + 1;

/// Always [`LADDER_BITS`] rows.
pub const NUM_ROWS: usize = LADDER_BITS;

#[derive(Clone, Debug)]
pub struct LadderTrace {
    pub trace: RowMajorMatrix<BaseField>,
    /// The point selected by the last row.
    pub output: Point,
}

fn field_bool(value: bool) -> BaseField {
    if value {
        BaseField::ONE
    } else {
        BaseField::ZERO
    }
}

/// Identity is encoded as the flag plus `(0, 0)`.
fn write_point(row: &mut [BaseField], x_col: usize, y_col: usize, point: &Point) {
    let (x, y) = point
        .coordinates()
        .unwrap_or((BaseField::ZERO, BaseField::ZERO));
    row[x_col] = x;
    row[y_col] = y;
}

/// Builds the ladder trace for `bits * base`.
///
/// The shape depends only on [`LADDER_BITS`]: zero bits still produce a row,
/// with the addition columns copying the accumulator and a zero slope.
///
/// # Errors
///
/// - [`TraceError::IdentityBase`] if `base` is the identity
/// - [`TraceError::Curve`] if a doubling or addition divides by zero
pub fn build_ladder_trace(
    base: &Point,
    bits: &[bool; LADDER_BITS],
) -> Result<LadderTrace, TraceError> {
    if base.is_identity() {
        return Err(TraceError::IdentityBase);
    }

    let mut acc = Point::Identity;
    let mut current = *base;
    let mut values = vec![BaseField::ZERO; NUM_ROWS * NUM_COLUMNS];

    for (row, &bit) in values.chunks_exact_mut(NUM_COLUMNS).zip(bits.iter()) {
        let (base_x, base_y) = current.coordinates().ok_or(TraceError::IdentityBase)?;

        row[ACC_INF_COL] = field_bool(acc.is_identity());
        write_point(row, ACC_X_COL, ACC_Y_COL, &acc);
        row[BASE_X_COL] = base_x;
        row[BASE_Y_COL] = base_y;
        row[BIT_COL] = field_bool(bit);

        let (sum, add_slope) = match (bit, acc) {
            (false, _) => (acc, BaseField::ZERO),
            (true, Point::Identity) => (current, BaseField::ZERO),
            (true, Point::Affine { x, y }) => {
                let slope = (y - base_y)
                    .try_div(&(x - base_x))
                    .ok_or(CurveError::DegenerateAddition)?;
                let sum_x = slope.square() - x - base_x;
                let sum_y = slope * (x - sum_x) - y;
                (Point::new(sum_x, sum_y), slope)
            }
        };
        write_point(row, ADD_X_COL, ADD_Y_COL, &sum);
        row[ADD_SLOPE_COL] = add_slope;

        let double_slope = (BaseField::THREE * base_x.square())
            .try_div(&(BaseField::TWO * base_y))
            .ok_or(CurveError::DegenerateDoubling)?;
        let double_x = double_slope.square() - base_x - base_x;
        let double_y = double_slope * (base_x - double_x) - base_y;
        row[DOUBLE_X_COL] = double_x;
        row[DOUBLE_Y_COL] = double_y;
        row[DOUBLE_SLOPE_COL] = double_slope;

        acc = sum;
        current = Point::new(double_x, double_y);
    }

    trace!(output = ?acc, "built ladder trace");
    Ok(LadderTrace {
        trace: RowMajorMatrix::new(values, NUM_COLUMNS),
        output: acc,
    })
}

fn ensure(holds: bool, row: usize, constraint: &'static str) -> Result<(), TraceError> {
    if holds {
        Ok(())
    } else {
        debug!(row, constraint, "ladder constraint violated");
        Err(TraceError::Constraint { row, constraint })
    }
}

fn is_bool(value: BaseField) -> bool {
    value * (value - BaseField::ONE) == BaseField::ZERO
}

/// `acc + bit * (add - acc)`: the accumulator carried into the next row.
fn selected(row: &[BaseField], acc_col: usize, add_col: usize) -> BaseField {
    row[acc_col] + row[BIT_COL] * (row[add_col] - row[acc_col])
}

/// Constraints local to one row.
fn eval_row(index: usize, row: &[BaseField]) -> Result<(), TraceError> {
    let one = BaseField::ONE;
    let acc_inf = row[ACC_INF_COL];
    let bit = row[BIT_COL];
    ensure(is_bool(acc_inf), index, "acc_inf_bool")?;
    ensure(is_bool(bit), index, "bit_bool")?;

    let (acc_x, acc_y) = (row[ACC_X_COL], row[ACC_Y_COL]);
    let (base_x, base_y) = (row[BASE_X_COL], row[BASE_Y_COL]);
    let (add_x, add_y) = (row[ADD_X_COL], row[ADD_Y_COL]);
    let add_slope = row[ADD_SLOPE_COL];

    ensure(acc_inf * acc_x == BaseField::ZERO, index, "identity_x")?;
    ensure(acc_inf * acc_y == BaseField::ZERO, index, "identity_y")?;
    ensure(
        base_y.square() == base_x.square() * base_x + BaseField::SEVEN,
        index,
        "base_on_curve",
    )?;

    // Doubling
    let (double_x, double_y) = (row[DOUBLE_X_COL], row[DOUBLE_Y_COL]);
    let double_slope = row[DOUBLE_SLOPE_COL];
    ensure(
        double_slope * BaseField::TWO * base_y == BaseField::THREE * base_x.square(),
        index,
        "double_slope",
    )?;
    ensure(
        double_x == double_slope.square() - base_x - base_x,
        index,
        "double_x",
    )?;
    ensure(
        double_y == double_slope * (base_x - double_x) - base_y,
        index,
        "double_y",
    )?;

    // Addition, only where the bit is set and the accumulator is affine
    let gate = bit * (one - acc_inf);
    if gate == one {
        ensure(acc_x != base_x, index, "add_distinct_x")?;
    }
    ensure(
        gate * (add_slope * (acc_x - base_x) - (acc_y - base_y)) == BaseField::ZERO,
        index,
        "add_slope",
    )?;
    ensure(
        gate * (add_x - (add_slope.square() - acc_x - base_x)) == BaseField::ZERO,
        index,
        "add_x",
    )?;
    ensure(
        gate * (add_y - (add_slope * (acc_x - add_x) - acc_y)) == BaseField::ZERO,
        index,
        "add_y",
    )?;
    ensure(
        (one - gate) * add_slope == BaseField::ZERO,
        index,
        "add_slope_unused",
    )?;

    // First addition into the identity takes the base
    let first = bit * acc_inf;
    ensure(first * (add_x - base_x) == BaseField::ZERO, index, "first_add_x")?;
    ensure(first * (add_y - base_y) == BaseField::ZERO, index, "first_add_y")?;

    // Zero bits copy the accumulator
    ensure(
        (one - bit) * (add_x - acc_x) == BaseField::ZERO,
        index,
        "copy_x",
    )?;
    ensure(
        (one - bit) * (add_y - acc_y) == BaseField::ZERO,
        index,
        "copy_y",
    )?;

    Ok(())
}

/// Constraints between row `index` and the row after it.
fn eval_transition(
    index: usize,
    row: &[BaseField],
    next: &[BaseField],
) -> Result<(), TraceError> {
    let next_inf = row[ACC_INF_COL] * (BaseField::ONE - row[BIT_COL]);
    ensure(next[ACC_INF_COL] == next_inf, index, "acc_inf_transition")?;
    ensure(
        next[ACC_X_COL] == selected(row, ACC_X_COL, ADD_X_COL),
        index,
        "acc_x_transition",
    )?;
    ensure(
        next[ACC_Y_COL] == selected(row, ACC_Y_COL, ADD_Y_COL),
        index,
        "acc_y_transition",
    )?;
    ensure(next[BASE_X_COL] == row[DOUBLE_X_COL], index, "base_x_transition")?;
    ensure(next[BASE_Y_COL] == row[DOUBLE_Y_COL], index, "base_y_transition")?;
    Ok(())
}

/// Checks that `trace` is a valid ladder for `base` ending in `expected`.
///
/// Every row and transition constraint is evaluated natively over the
/// coordinate field; the first row must start from the identity at `base`
/// and the last row's selection must equal `expected`.
pub fn verify_ladder_trace(
    trace: &LadderTrace,
    base: &Point,
    expected: &Point,
) -> Result<(), TraceError> {
    let matrix = &trace.trace;
    if matrix.height() != NUM_ROWS || matrix.width() != NUM_COLUMNS {
        return Err(TraceError::Shape {
            rows: matrix.height(),
            width: matrix.width(),
            expected_rows: NUM_ROWS,
            expected_width: NUM_COLUMNS,
        });
    }

    let rows: Vec<&[BaseField]> = matrix.values.chunks_exact(NUM_COLUMNS).collect();
    let (base_x, base_y) = base.coordinates().ok_or(TraceError::IdentityBase)?;

    let first = rows[0];
    if first[ACC_INF_COL] != BaseField::ONE {
        return Err(TraceError::Boundary("first_acc_inf"));
    }
    if first[BASE_X_COL] != base_x || first[BASE_Y_COL] != base_y {
        return Err(TraceError::Boundary("first_base"));
    }

    for (index, row) in rows.iter().enumerate() {
        eval_row(index, row)?;
    }
    for (index, pair) in rows.windows(2).enumerate() {
        eval_transition(index, pair[0], pair[1])?;
    }

    let last = rows[NUM_ROWS - 1];
    let out_inf = last[ACC_INF_COL] * (BaseField::ONE - last[BIT_COL]);
    let out_x = selected(last, ACC_X_COL, ADD_X_COL);
    let out_y = selected(last, ACC_Y_COL, ADD_Y_COL);
    let matches = match expected.coordinates() {
        None => out_inf == BaseField::ONE,
        Some((x, y)) => out_inf == BaseField::ZERO && out_x == x && out_y == y,
    };
    if !matches {
        return Err(TraceError::Boundary("output"));
    }

    Ok(())
}
