use crate::params::{Params, State, FULL_ROUNDS, ROUNDS, WIDTH};
use group::ff::PrimeField;

/// Kind of a round, as reported by [`Params::permute_with_trace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundKind {
    Full,
    Partial,
}

impl<F: PrimeField> Params<F> {
    /// Applies the Poseidon2 permutation to the given state
    pub fn permute(&self, state: &mut State<F>) {
        self.run(state, |_, _| {});
    }

    /// Same permutation, recording the state after every round. Useful for
    /// locating the first diverging round against another implementation.
    pub fn permute_with_trace(&self, state: &mut State<F>) -> Vec<(RoundKind, State<F>)> {
        let mut trace = Vec::with_capacity(ROUNDS);
        self.run(state, |kind, state| trace.push((kind, *state)));
        trace
    }

    fn run(&self, state: &mut State<F>, mut observe: impl FnMut(RoundKind, &State<F>)) {
        let (first, last) = self.constants.full.split_at(FULL_ROUNDS / 2);

        // Initial linear layer
        self.mds.apply(state);

        // First half of the full rounds
        for constants in first.iter() {
            self.full_round(state, constants);
            observe(RoundKind::Full, state);
        }

        // Partial rounds
        for constant in self.constants.partial.iter() {
            self.partial_round(state, constant);
            observe(RoundKind::Partial, state);
        }

        // Second half of the full rounds
        for constants in last.iter() {
            self.full_round(state, constants);
            observe(RoundKind::Full, state);
        }
    }

    pub(crate) fn full_round(&self, state: &mut State<F>, constants: &[F; WIDTH]) {
        state.add_constants(constants);
        state.sbox_full();
        self.mds.apply(state);
    }

    pub(crate) fn partial_round(&self, state: &mut State<F>, constant: &F) {
        state.add_constant(constant);
        state.sbox_part();
        self.mds.apply(state);
    }
}
