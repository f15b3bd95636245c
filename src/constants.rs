//! The published constant set: linear layer coefficients and round constants.
//!
//! The round constants are fixed placeholder values, not the output of the
//! Grain LFSR parameter generation. Deployments that need audited constants
//! load them through [`crate::config::ParamsFile`].

use crate::params::{FULL_ROUNDS, PARTIAL_ROUNDS, WIDTH};

pub(crate) const MDS: [[u64; WIDTH]; WIDTH] = [[5, 7, 1], [3, 4, 6], [1, 1, 4]];

/// One triple per full round. Rounds `0..4` precede the partial rounds,
/// rounds `4..8` follow them.
pub(crate) const FULL_ROUND_CONSTANTS: [[u64; WIDTH]; FULL_ROUNDS] = [
    [0x8a8b7c6d5, 0x9e9f8a7b6, 0xa5b4c3d2e],
    [0x789abcdef, 0x012345678, 0xbcdef0123],
    [0xef0123456, 0x6789abcde, 0x23456789a],
    [0x123456789, 0xabcdef012, 0x456789abc],
    [0x789012345, 0xcdef01234, 0x56789abcd],
    [0xef0123456, 0x789abcdef, 0x012345678],
    [0x123456789, 0xabcdef012, 0x456789abc],
    [0x789abcdef, 0x012345678, 0xbcdef0123],
];

pub(crate) const PARTIAL_ROUND_CONSTANTS: [u64; PARTIAL_ROUNDS] = [
    0x1a2b3c4d5e6f7890, 0x1234567890abcdef, 0x23456789abcdef01,
    0x3456789abcdef012, 0x456789abcdef0123, 0x56789abcdef01234,
    0x6789abcdef012345, 0x789abcdef0123456, 0x89abcdef01234567,
    0x9abcdef012345678, 0xabcdef0123456789, 0xbcdef0123456789a,
    0xcdef0123456789ab, 0xdef0123456789abc, 0xef0123456789abcd,
    0xf0123456789abcde, 0x0123456789abcdef, 0x123456789abcdef0,
    0x23456789abcdef01, 0x3456789abcdef012, 0x456789abcdef0123,
    0x56789abcdef01234, 0x6789abcdef012345, 0x789abcdef0123456,
    0x89abcdef01234567, 0x9abcdef012345678, 0xabcdef0123456789,
    0xbcdef0123456789a, 0xcdef0123456789ab, 0xdef0123456789abc,
    0xef0123456789abcd, 0xf0123456789abcde, 0x0123456789abcdef,
    0x123456789abcdef0, 0x23456789abcdef01, 0x3456789abcdef012,
    0x456789abcdef0123, 0x56789abcdef01234, 0x6789abcdef012345,
    0x789abcdef0123456, 0x89abcdef01234567, 0x9abcdef012345678,
    0xabcdef0123456789, 0xbcdef0123456789a, 0xcdef0123456789ab,
    0xdef0123456789abc, 0xef0123456789abcd, 0xf0123456789abcde,
    0x0123456789abcdef, 0x123456789abcdef0, 0x23456789abcdef01,
    0x3456789abcdef012, 0x456789abcdef0123, 0x56789abcdef01234,
    0x6789abcdef012345, 0x789abcdef0123456,
];
