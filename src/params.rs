use std::ops::Index;

use crate::constants::{FULL_ROUND_CONSTANTS, MDS, PARTIAL_ROUND_CONSTANTS};
use crate::field::pow5;
use crate::matrix::Matrix;
use crate::{Error, Result};
use group::ff::PrimeField;

/// Number of field elements in the permutation state.
pub const WIDTH: usize = 3;
/// Full rounds, split evenly before and after the partial rounds.
pub const FULL_ROUNDS: usize = 8;
pub const PARTIAL_ROUNDS: usize = 56;
pub const ROUNDS: usize = FULL_ROUNDS + PARTIAL_ROUNDS;
pub const SBOX_DEGREE: u64 = 5;

/// `State` is the `WIDTH` sized register threaded through the permutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State<F: PrimeField>(pub(crate) [F; WIDTH]);

impl<F: PrimeField> State<F> {
    pub fn new(words: [F; WIDTH]) -> Self {
        State(words)
    }

    /// Applies sbox for all elements of the state.
    pub(crate) fn sbox_full(&mut self) {
        for e in self.0.iter_mut() {
            *e = pow5(*e);
        }
    }

    /// Partial round sbox applies sbox to the first element of the state.
    pub(crate) fn sbox_part(&mut self) {
        self.0[0] = pow5(self.0[0]);
    }

    /// Adds constants to all elements of the state
    pub(crate) fn add_constants(&mut self, constants: &[F; WIDTH]) {
        for (e, constant) in self.0.iter_mut().zip(constants.iter()) {
            *e += constant;
        }
    }

    /// Only adds a constant to the first element of the state
    pub(crate) fn add_constant(&mut self, constant: &F) {
        self.0[0] += constant;
    }

    /// Copies elements of the state
    pub fn words(&self) -> [F; WIDTH] {
        self.0
    }

    /// First element of the state is the result
    pub fn result(&self) -> F {
        self.0[0]
    }
}

/// `MDSMatrix` is the single linear layer shared by the initial mix, the
/// full rounds and the partial rounds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MDSMatrix<F: PrimeField>(pub(crate) Matrix<F, WIDTH>);

impl<F: PrimeField> Index<usize> for MDSMatrix<F> {
    type Output = [F; WIDTH];

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0 .0[idx]
    }
}

impl<F: PrimeField> MDSMatrix<F> {
    /// Applies `MDSMatrix` to the state
    pub(crate) fn apply(&self, state: &mut State<F>) {
        state.0 = self.0.mul_vector(&state.0);
    }

    pub fn rows(&self) -> [[F; WIDTH]; WIDTH] {
        self.0 .0
    }
}

/// `RoundConstants` holds a triple for every full round and a single
/// element for every partial round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConstants<F: PrimeField> {
    pub(crate) full: Vec<[F; WIDTH]>,
    pub(crate) partial: Vec<F>,
}

impl<F: PrimeField> RoundConstants<F> {
    pub fn full(&self) -> &[[F; WIDTH]] {
        &self.full
    }

    pub fn partial(&self) -> &[F] {
        &self.partial
    }
}

/// `Params` holds everything the permutation is configured with. Instances
/// are immutable once built and can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params<F: PrimeField> {
    pub(crate) mds: MDSMatrix<F>,
    pub(crate) constants: RoundConstants<F>,
}

impl<F: PrimeField> Params<F> {
    /// Builds parameters from caller supplied tables.
    ///
    /// Fails unless there are exactly `FULL_ROUNDS` constant triples,
    /// exactly `PARTIAL_ROUNDS` partial constants and the matrix is MDS.
    pub fn new(mds: [[F; WIDTH]; WIDTH], full: Vec<[F; WIDTH]>, partial: Vec<F>) -> Result<Self> {
        if full.len() != FULL_ROUNDS {
            return Err(Error::FullConstantsLength {
                expected: FULL_ROUNDS,
                got: full.len(),
            });
        }
        if partial.len() != PARTIAL_ROUNDS {
            return Err(Error::PartialConstantsLength {
                expected: PARTIAL_ROUNDS,
                got: partial.len(),
            });
        }
        let mds = Matrix(mds);
        if !mds.is_mds() {
            return Err(Error::NotMds);
        }
        log::debug!(
            "poseidon2 params accepted: {} full rounds, {} partial rounds",
            full.len(),
            partial.len()
        );

        Ok(Self {
            mds: MDSMatrix(mds),
            constants: RoundConstants { full, partial },
        })
    }

    /// The published constant set. Table lengths are fixed by the array
    /// types of the raw tables, so no runtime validation is needed here.
    pub fn standard() -> Self {
        let full = FULL_ROUND_CONSTANTS
            .iter()
            .map(|row| row.map(F::from))
            .collect();
        let partial = PARTIAL_ROUND_CONSTANTS.iter().copied().map(F::from).collect();

        Self {
            mds: MDSMatrix(Matrix::from_u64(&MDS)),
            constants: RoundConstants { full, partial },
        }
    }

    pub fn mds(&self) -> &MDSMatrix<F> {
        &self.mds
    }

    pub fn constants(&self) -> &RoundConstants<F> {
        &self.constants
    }
}
