//! Poseidon2 permutation over a width three state of BN254 scalar field
//! elements, reduced to a single output element.
//!
//! The permutation runs an initial linear layer, four full rounds, fifty six
//! partial rounds and four more full rounds, then emits the first state
//! element. [`hash`] is the process wide entry point over the published
//! constant set; [`Poseidon2`] and [`Params`] expose the same construction
//! over caller supplied constants.

mod constants;
mod error;
mod field;
mod hasher;
mod matrix;
mod merkle;
mod params;
mod permutation;

pub mod config;

use group::ff::PrimeField;
use num_bigint::BigUint as big_uint;

pub use error::{Error, Result};
pub use field::{from_repr_hex, parse_element, pow5, to_decimal, to_hex, to_repr_hex};
pub use halo2curves::bn256::Fr;
pub use hasher::{hash, hash_canonical, Poseidon2, MERKLE_DOMAIN_TAG, MERKLE_LEAF_TAG};
pub use merkle::{MerkleProof, MerkleTree};
pub use params::{
    MDSMatrix, Params, RoundConstants, State, FULL_ROUNDS, PARTIAL_ROUNDS, ROUNDS, SBOX_DEGREE,
    WIDTH,
};
pub use permutation::RoundKind;

pub(crate) fn modulus<F: PrimeField>() -> big_uint {
    fe_to_big(-F::ONE) + 1usize
}

/// Reads a field element as an integer in `[0, p)`.
/// Assumes the little endian canonical encoding every supported field uses.
pub(crate) fn fe_to_big<F: PrimeField>(fe: F) -> big_uint {
    big_uint::from_bytes_le(fe.to_repr().as_ref())
}

/// Canonical conversion. Values at or above the modulus are rejected.
pub(crate) fn big_to_fe<F: PrimeField>(e: &big_uint) -> Option<F> {
    if *e >= modulus::<F>() {
        return None;
    }
    let mut repr = F::Repr::default();
    let bytes = e.to_bytes_le();
    repr.as_mut()[..bytes.len()].copy_from_slice(&bytes);
    Option::from(F::from_repr(repr))
}

/// Reducing conversion, only used for fixed constant tables.
pub(crate) fn reduce<F: PrimeField>(e: &big_uint) -> F {
    let radix = F::from(256);
    e.to_bytes_be()
        .iter()
        .fold(F::ZERO, |acc, byte| acc * radix + F::from(u64::from(*byte)))
}
