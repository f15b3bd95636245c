//! Small dense square matrices. Only vector multiplication runs inside the
//! permutation; the determinant routines are used once, when parameters are
//! validated.

use group::ff::PrimeField;

#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) struct Matrix<F: PrimeField, const T: usize>(pub(crate) [[F; T]; T]);

impl<F: PrimeField, const T: usize> Default for Matrix<F, T> {
    fn default() -> Self {
        Matrix([[F::ZERO; T]; T])
    }
}

impl<F: PrimeField, const T: usize> Matrix<F, T> {
    pub(crate) fn from_u64(rows: &[[u64; T]; T]) -> Self {
        let mut m = Self::default();
        for (row, coefficients) in m.0.iter_mut().zip(rows.iter()) {
            for (cell, coefficient) in row.iter_mut().zip(coefficients.iter()) {
                *cell = F::from(*coefficient);
            }
        }
        m
    }

    pub(crate) fn mul_vector(&self, v: &[F; T]) -> [F; T] {
        let mut result = [F::ZERO; T];
        for (row, cell) in self.0.iter().zip(result.iter_mut()) {
            for (a_i, v_i) in row.iter().zip(v.iter()) {
                *cell += *v_i * *a_i;
            }
        }
        result
    }

    /// A matrix is MDS iff every square submatrix is nonsingular.
    pub(crate) fn is_mds(&self) -> bool {
        let subsets = 1usize << T;
        (1..subsets).all(|rows| {
            (1..subsets)
                .filter(|cols| cols.count_ones() == rows.count_ones())
                .all(|cols| !bool::from(self.minor(rows, cols).is_zero()))
        })
    }

    /// Determinant of the submatrix selected by the `rows` and `cols` bitmasks.
    fn minor(&self, rows: usize, cols: usize) -> F {
        let sub: Vec<Vec<F>> = (0..T)
            .filter(|i| rows & (1 << i) != 0)
            .map(|i| {
                (0..T)
                    .filter(|j| cols & (1 << j) != 0)
                    .map(|j| self.0[i][j])
                    .collect()
            })
            .collect();
        determinant(sub)
    }
}

// Gaussian elimination over the field.
fn determinant<F: PrimeField>(mut m: Vec<Vec<F>>) -> F {
    let n = m.len();
    let mut det = F::ONE;
    for col in 0..n {
        let pivot = match (col..n).find(|&row| !bool::from(m[row][col].is_zero())) {
            Some(pivot) => pivot,
            None => return F::ZERO,
        };
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }
        let inverse = match Option::<F>::from(m[col][col].invert()) {
            Some(inverse) => inverse,
            None => return F::ZERO,
        };
        det *= m[col][col];
        for row in col + 1..n {
            let factor = m[row][col] * inverse;
            for k in col..n {
                let e = m[col][k];
                m[row][k] -= factor * e;
            }
        }
    }
    det
}
