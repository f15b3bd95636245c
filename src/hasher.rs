use std::sync::OnceLock;

use crate::field::from_repr_bytes;
use crate::params::{Params, State, WIDTH};
use crate::{to_repr_hex, Error, Fr, Result};
use group::ff::PrimeField;

/// Third input slot of a merkle node, `2^arity - 1` for binary trees.
pub const MERKLE_DOMAIN_TAG: u64 = (1 << (WIDTH - 1)) - 1;
/// Third input slot of a merkle leaf. Keeps leaf digests apart from node
/// digests so a node can never be replayed as a leaf.
pub const MERKLE_LEAF_TAG: u64 = 1;

/// Poseidon2 hasher that hashes `WIDTH` elements to a single output
#[derive(Debug, Clone)]
pub struct Poseidon2<F: PrimeField> {
    params: Params<F>,
}

impl<F: PrimeField> Poseidon2<F> {
    pub fn new(params: Params<F>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params<F> {
        &self.params
    }

    /// Perform hashing
    pub fn hash(&self, inputs: &[F; WIDTH]) -> F {
        let mut state = State::new(*inputs);
        self.params.permute(&mut state);
        state.result()
    }

    /// Digest of a merkle leaf
    pub fn hash_leaf(&self, leaf: F) -> F {
        self.hash(&[leaf, F::ZERO, F::from(MERKLE_LEAF_TAG)])
    }

    /// Compresses two tree nodes into their parent
    pub fn compress(&self, left: F, right: F) -> F {
        self.hash(&[left, right, F::from(MERKLE_DOMAIN_TAG)])
    }
}

impl Poseidon2<Fr> {
    /// Process wide instance over the published constants, built on first use.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Poseidon2<Fr>> = OnceLock::new();
        STANDARD.get_or_init(|| Poseidon2::new(Params::standard()))
    }
}

/// Hashes three field elements with the published constants.
pub fn hash(inputs: &[Fr; WIDTH]) -> Fr {
    Poseidon2::standard().hash(inputs)
}

/// Hashes three canonical 32 byte little endian encodings.
///
/// Encodings of integers at or above the modulus are rejected instead of
/// being reduced.
pub fn hash_canonical(inputs: &[[u8; 32]; WIDTH]) -> Result<Fr> {
    let mut elements = [Fr::default(); WIDTH];
    for (element, bytes) in elements.iter_mut().zip(inputs.iter()) {
        *element =
            from_repr_bytes(bytes).ok_or_else(|| Error::NonCanonical(hex::encode(bytes)))?;
    }
    let digest = hash(&elements);
    log::trace!("hash_canonical -> {}", to_repr_hex(digest));
    Ok(digest)
}
