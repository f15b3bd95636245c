//! Field element helpers: the degree five power map and the textual and
//! byte encodings accepted at the crate boundary.

use crate::{big_to_fe, fe_to_big, reduce, Error, Result};
use group::ff::{Field, PrimeField};
use num_bigint::BigUint as big_uint;
use num_traits::Num;

/// Computes `x^5` with two squarings and one multiplication.
#[inline]
pub fn pow5<F: Field>(x: F) -> F {
    let x2 = x.square();
    let x4 = x2.square();
    x4 * x
}

fn parse_big(s: &str) -> Result<big_uint> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => big_uint::from_str_radix(digits, 16),
        None => big_uint::from_str_radix(trimmed, 10),
    };
    parsed.map_err(|_| Error::InvalidNumber(s.to_string()))
}

/// Parses a decimal or `0x` prefixed hex integer into a field element.
///
/// Values outside `[0, p)` are rejected rather than reduced, so a hash
/// computed here always agrees with any other implementation fed the same
/// integers.
pub fn parse_element<F: PrimeField>(s: &str) -> Result<F> {
    let value = parse_big(s)?;
    big_to_fe(&value).ok_or_else(|| Error::NonCanonical(s.to_string()))
}

/// Parses a constant table entry, reducing it modulo `p`.
pub(crate) fn parse_constant<F: PrimeField>(s: &str) -> Result<F> {
    parse_big(s).map(|value| reduce(&value))
}

pub fn to_decimal<F: PrimeField>(fe: F) -> String {
    fe_to_big(fe).to_str_radix(10)
}

/// Big endian hex with a `0x` prefix, zero padded to the encoding width.
pub fn to_hex<F: PrimeField>(fe: F) -> String {
    let width = 2 * F::Repr::default().as_ref().len();
    format!("0x{:0>width$}", fe_to_big(fe).to_str_radix(16), width = width)
}

/// Hex of the canonical little endian byte encoding.
pub fn to_repr_hex<F: PrimeField>(fe: F) -> String {
    hex::encode(fe.to_repr().as_ref())
}

/// Inverse of [`to_repr_hex`]. Non canonical encodings are rejected.
pub fn from_repr_hex<F: PrimeField>(s: &str) -> Result<F> {
    let bytes = hex::decode(s).map_err(|_| Error::InvalidNumber(s.to_string()))?;
    from_repr_bytes(&bytes).ok_or_else(|| Error::NonCanonical(s.to_string()))
}

pub(crate) fn from_repr_bytes<F: PrimeField>(bytes: &[u8]) -> Option<F> {
    let mut repr = F::Repr::default();
    if repr.as_ref().len() != bytes.len() {
        return None;
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(F::from_repr(repr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fr, SBOX_DEGREE};
    use rand_core::OsRng;

    const P_MINUS_ONE: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495616";
    const P: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";

    #[test]
    fn pow5_matches_repeated_multiplication() {
        for _ in 0..32 {
            let x = Fr::random(OsRng);
            assert_eq!(pow5(x), x * x * x * x * x);
            assert_eq!(pow5(x), x.pow_vartime([SBOX_DEGREE]));
        }
        assert_eq!(pow5(Fr::from(2u64)), Fr::from(32u64));
        assert_eq!(pow5(Fr::ZERO), Fr::ZERO);
        assert_eq!(pow5(-Fr::ONE), -Fr::ONE);
    }

    #[test]
    fn parse_accepts_decimal_and_hex() {
        assert_eq!(parse_element::<Fr>("42").unwrap(), Fr::from(42u64));
        assert_eq!(parse_element::<Fr>("0x2a").unwrap(), Fr::from(42u64));
        assert_eq!(parse_element::<Fr>(" 0X2A ").unwrap(), Fr::from(42u64));
        assert_eq!(parse_element::<Fr>(P_MINUS_ONE).unwrap(), -Fr::ONE);
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert!(matches!(
            parse_element::<Fr>(P),
            Err(Error::NonCanonical(_))
        ));
        assert!(matches!(
            parse_element::<Fr>("12ab"),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_element::<Fr>(""),
            Err(Error::InvalidNumber(_))
        ));
    }

    #[test]
    fn constants_are_reduced() {
        assert_eq!(parse_constant::<Fr>(P).unwrap(), Fr::ZERO);
        assert_eq!(parse_constant::<Fr>("0x8a8b7c6d5").unwrap(), Fr::from(0x8a8b7c6d5u64));
    }

    #[test]
    fn encodings() {
        let fe = Fr::from(42u64);
        assert_eq!(to_decimal(fe), "42");
        assert_eq!(
            to_hex(fe),
            "0x000000000000000000000000000000000000000000000000000000000000002a"
        );
        assert_eq!(
            to_repr_hex(fe),
            "2a00000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(from_repr_hex::<Fr>(&to_repr_hex(fe)).unwrap(), fe);
        assert_eq!(to_decimal(-Fr::ONE), P_MINUS_ONE);
    }

    #[test]
    fn repr_rejects_non_canonical() {
        // p in little endian
        let p_le = "010000f093f5e1439170b97948e833285d588181b64550b829a031e1724e6430";
        assert!(matches!(
            from_repr_hex::<Fr>(p_le),
            Err(Error::NonCanonical(_))
        ));
        assert!(matches!(
            from_repr_hex::<Fr>("2a00"),
            Err(Error::NonCanonical(_))
        ));
        assert!(matches!(
            from_repr_hex::<Fr>("zz"),
            Err(Error::InvalidNumber(_))
        ));
    }
}
