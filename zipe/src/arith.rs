//! Modular arithmetic on non-negative residues.
//!
//! Group elements live in `[1, p)` and exponents in `[0, q)`. Every signed
//! value entering the scheme goes through [`reduce`] first, so nothing below
//! ever sees a negative operand.
use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// `base^exponent mod modulus`.
pub fn pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// `a * b mod modulus`.
pub fn mul_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b) % modulus
}

/// Inverse of `value` modulo `modulus` through the extended Euclidean algorithm.
///
/// Fails with [`Error::NotInvertible`] when `gcd(value, modulus) != 1`.
pub fn inv_mod(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let m = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(value % modulus), m);
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        (old_r, r) = (r.clone(), &old_r - &quotient * &r);
        (old_s, s) = (s.clone(), &old_s - &quotient * &s);
    }

    if !old_r.is_one() {
        return Err(Error::NotInvertible);
    }
    Ok(reduce(&old_s, modulus))
}

/// Map a signed integer to its residue in `[0, modulus)`.
///
/// `%` keeps the sign of the dividend, so negative remainders are shifted
/// back by one modulus.
pub fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let mut r = value % &m;
    if r.sign() == Sign::Minus {
        r += &m;
    }
    r.magnitude().clone()
}

/// Reduce every coordinate of `vector` into `[0, modulus)`.
pub fn reduce_vector<T: Clone>(vector: &[T], modulus: &BigUint) -> Vec<BigUint>
where
    BigInt: From<T>,
{
    vector
        .iter()
        .map(|v_i| reduce(&BigInt::from(v_i.clone()), modulus))
        .collect()
}

/// `sum(a[i] * b[i]) mod modulus`.
pub fn inner_product(a: &[BigUint], b: &[BigUint], modulus: &BigUint) -> BigUint {
    a.iter()
        .zip(b)
        .fold(BigUint::zero(), |acc, (a_i, b_i)| (acc + a_i * b_i) % modulus)
}

/// Uniform scalar in `[0, bound)`.
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

pub(crate) fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

pub(crate) fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a > b { a - b } else { b - a }
}
