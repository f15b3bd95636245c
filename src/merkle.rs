use crate::hasher::Poseidon2;
use crate::{Error, Result};
use group::ff::PrimeField;

/// Binary merkle tree whose nodes are compressed with [`Poseidon2::compress`].
///
/// Every leaf enters the tree as [`Poseidon2::hash_leaf`] of its value. The
/// leaf layer is padded up to the next power of two with zero nodes, which
/// no leaf digest can equal, so `[a, b, c]` and `[a, b, c, 0]` have
/// different roots.
#[derive(Debug, Clone)]
pub struct MerkleTree<F: PrimeField> {
    // layers[0] holds the leaf digests and padding, the last layer the root
    layers: Vec<Vec<F>>,
    leaves: Vec<F>,
}

impl<F: PrimeField> MerkleTree<F> {
    pub fn new(hasher: &Poseidon2<F>, leaves: &[F]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyTree);
        }

        let mut nodes: Vec<F> = leaves.iter().map(|leaf| hasher.hash_leaf(*leaf)).collect();
        nodes.resize(leaves.len().next_power_of_two(), F::ZERO);

        let mut layers = Vec::new();
        while nodes.len() > 1 {
            let parents = nodes
                .chunks(2)
                .map(|pair| hasher.compress(pair[0], pair[1]))
                .collect();
            layers.push(std::mem::replace(&mut nodes, parents));
        }
        layers.push(nodes);
        log::debug!(
            "merkle tree built over {} leaves, depth {}",
            leaves.len(),
            layers.len() - 1
        );

        Ok(Self {
            layers,
            leaves: leaves.to_vec(),
        })
    }

    pub fn root(&self) -> F {
        // `new` never leaves the layer list or the top layer empty
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or(F::ZERO)
    }

    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Leaves as supplied, without padding
    pub fn leaves(&self) -> &[F] {
        &self.leaves
    }

    /// Authentication path for the leaf at `index`
    pub fn proof(&self, index: usize) -> Result<MerkleProof<F>> {
        if index >= self.leaves.len() {
            return Err(Error::LeafIndex {
                index,
                leaves: self.leaves.len(),
            });
        }

        let siblings = self
            .layers
            .iter()
            .take(self.depth())
            .enumerate()
            .map(|(level, layer)| layer[(index >> level) ^ 1])
            .collect();
        Ok(MerkleProof { index, siblings })
    }
}

/// Sibling path from a leaf up to the root. Bit `i` of `index` tells whether
/// the running node is the right child at level `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof<F: PrimeField> {
    pub index: usize,
    pub siblings: Vec<F>,
}

impl<F: PrimeField> MerkleProof<F> {
    pub fn compute_root(&self, hasher: &Poseidon2<F>, leaf: F) -> F {
        self.siblings
            .iter()
            .enumerate()
            .fold(hasher.hash_leaf(leaf), |node, (level, sibling)| {
                if (self.index >> level) & 1 == 0 {
                    hasher.compress(node, *sibling)
                } else {
                    hasher.compress(*sibling, node)
                }
            })
    }

    /// Fails for an index with bits above the path length, so a leaf only
    /// verifies at the one position it was proven for.
    pub fn verify(&self, hasher: &Poseidon2<F>, leaf: F, root: F) -> bool {
        let in_range = u32::try_from(self.siblings.len())
            .ok()
            .and_then(|depth| self.index.checked_shr(depth))
            .map_or(true, |high| high == 0);
        in_range && self.compute_root(hasher, leaf) == root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fr;
    use group::ff::Field;
    use rand_core::OsRng;

    fn leaves(values: &[u64]) -> Vec<Fr> {
        values.iter().copied().map(Fr::from).collect()
    }

    #[test]
    fn test_merkle() {
        let hasher = Poseidon2::standard();

        let tree = MerkleTree::new(hasher, &leaves(&[1, 2, 3, 4])).unwrap();
        assert_eq!(tree.depth(), 2);
        assert_eq!(
            tree.root(),
            Fr::from_str_vartime(
                "21261052428748157166366176705482419466173756105452682371344439214733384977547"
            )
            .unwrap()
        );

        let tree = MerkleTree::new(hasher, &leaves(&[1, 2, 3])).unwrap();
        assert_eq!(tree.leaves(), &leaves(&[1, 2, 3])[..]);
        assert_eq!(
            tree.root(),
            Fr::from_str_vartime(
                "6220790214169623298207377205045575629456859073330967866004311502281524818359"
            )
            .unwrap()
        );
    }

    #[test]
    fn root_matches_manual_compression() {
        let hasher = Poseidon2::standard();
        let values = leaves(&[5, 6, 7, 8]);
        let tree = MerkleTree::new(hasher, &values).unwrap();
        let digests: Vec<Fr> = values.iter().map(|v| hasher.hash_leaf(*v)).collect();
        let left = hasher.compress(digests[0], digests[1]);
        let right = hasher.compress(digests[2], digests[3]);
        assert_eq!(tree.root(), hasher.compress(left, right));
    }

    #[test]
    fn single_leaf_root_is_leaf_digest() {
        let hasher = Poseidon2::standard();
        let tree = MerkleTree::new(hasher, &leaves(&[7])).unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.root(), hasher.hash_leaf(Fr::from(7u64)));
        assert_eq!(
            tree.root(),
            Fr::from_str_vartime(
                "14046501251470242321146979873535811206388071452763423792469044506716375011529"
            )
            .unwrap()
        );

        let proof = tree.proof(0).unwrap();
        assert!(proof.siblings.is_empty());
        assert!(proof.verify(hasher, Fr::from(7u64), tree.root()));
    }

    #[test]
    fn empty_tree_is_rejected() {
        let hasher = Poseidon2::standard();
        assert!(matches!(
            MerkleTree::new(hasher, &[]),
            Err(Error::EmptyTree)
        ));
    }

    #[test]
    fn proofs_verify_for_every_leaf() {
        let hasher = Poseidon2::standard();
        for size in 1..=9 {
            let values: Vec<Fr> = (0..size).map(|_| Fr::random(OsRng)).collect();
            let tree = MerkleTree::new(hasher, &values).unwrap();
            let root = tree.root();
            for (index, leaf) in values.iter().enumerate() {
                let proof = tree.proof(index).unwrap();
                assert_eq!(proof.siblings.len(), tree.depth());
                assert!(proof.verify(hasher, *leaf, root));
                assert!(!proof.verify(hasher, *leaf + Fr::ONE, root));
            }
            assert!(matches!(
                tree.proof(size),
                Err(Error::LeafIndex { .. })
            ));
        }
    }

    #[test]
    fn tampered_proof_fails() {
        let hasher = Poseidon2::standard();
        let values = leaves(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let tree = MerkleTree::new(hasher, &values).unwrap();

        let mut proof = tree.proof(3).unwrap();
        proof.siblings[1] += Fr::ONE;
        assert!(!proof.verify(hasher, values[3], tree.root()));

        let mut proof = tree.proof(3).unwrap();
        proof.index = 2;
        assert!(!proof.verify(hasher, values[3], tree.root()));
    }

    #[test]
    fn internal_nodes_do_not_verify_as_leaves() {
        let hasher = Poseidon2::standard();
        let tree = MerkleTree::new(hasher, &leaves(&[1, 2, 3, 4])).unwrap();

        // A shorter tree built over the level one nodes of `tree`.
        let digest = |v: u64| hasher.hash_leaf(Fr::from(v));
        let left = hasher.compress(digest(1), digest(2));
        let right = hasher.compress(digest(3), digest(4));
        let forged = MerkleTree::new(hasher, &[left, right]).unwrap();
        assert_ne!(forged.root(), tree.root());

        // The same nodes presented as leaves of a one level proof.
        let proof = MerkleProof {
            index: 0,
            siblings: vec![right],
        };
        assert!(!proof.verify(hasher, left, tree.root()));
    }

    #[test]
    fn index_beyond_path_is_rejected() {
        let hasher = Poseidon2::standard();
        let values = leaves(&[1, 2, 3, 4]);
        let tree = MerkleTree::new(hasher, &values).unwrap();

        let mut proof = tree.proof(1).unwrap();
        assert!(proof.verify(hasher, values[1], tree.root()));
        proof.index += 4;
        assert_eq!(proof.compute_root(hasher, values[1]), tree.root());
        assert!(!proof.verify(hasher, values[1], tree.root()));

        proof.index = usize::MAX;
        assert!(!proof.verify(hasher, values[1], tree.root()));
    }

    #[test]
    fn padding_is_not_a_zero_leaf() {
        let hasher = Poseidon2::standard();
        let padded = MerkleTree::new(hasher, &leaves(&[1, 2, 3])).unwrap();
        let explicit = MerkleTree::new(hasher, &leaves(&[1, 2, 3, 0])).unwrap();
        assert_ne!(padded.root(), explicit.root());
        assert_eq!(
            explicit.root(),
            Fr::from_str_vartime(
                "2844718250368189952152634840111236724776420408155647956372159567387174787803"
            )
            .unwrap()
        );
    }
}
