//! Validation of the working group `Z_p^*`: primality of the modulus,
//! factorization of its order and selection of a full-order generator.
use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::arith::{abs_diff, gcd, mul_mod, pow};
use crate::consts;
use crate::error::{Error, Result};
use crate::generic::ZipGroup;

lazy_static::lazy_static! {
    static ref SMALL_PRIMES: Vec<u32> = sieve(consts::SMALL_PRIME_BOUND);
    static ref P128_PRIME: BigUint = (BigUint::one() << consts::P128_SHIFT) - consts::P128_OFFSET;
    static ref MODP_2048_PRIME: BigUint = BigUint::from_slice(&consts::MODP_2048_PRIME);
}

fn sieve(bound: usize) -> Vec<u32> {
    let mut composite = vec![false; bound];
    let mut primes = Vec::new();
    for i in 2..bound {
        if composite[i] {
            continue;
        }
        primes.push(i as u32);
        let mut j = i * i;
        while j < bound {
            composite[j] = true;
            j += i;
        }
    }
    primes
}

/// Vetted moduli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 1009, for tests and demonstrations only.
    Toy,
    /// 2^128 - 159.
    P128,
    /// RFC 3526 group 14, a 2048-bit safe prime.
    Modp2048,
}

impl Preset {
    pub fn modulus(self) -> BigUint {
        match self {
            Preset::Toy => BigUint::from(consts::TOY_PRIME),
            Preset::P128 => P128_PRIME.clone(),
            Preset::Modp2048 => MODP_2048_PRIME.clone(),
        }
    }
}

/// Miller-Rabin test with random bases, after trial division by small primes.
pub fn is_probable_prime<R: CryptoRng + RngCore>(n: &BigUint, rng: &mut R) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    let trial = &SMALL_PRIMES[..consts::PRIMALITY_TRIAL_PRIMES];
    for &p in trial {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }
    // no factor below the largest trial prime
    let largest = BigUint::from(trial[trial.len() - 1]);
    if *n < &largest * &largest {
        return true;
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..consts::MILLER_RABIN_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(&x, &x, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Distinct prime factors of `n`, in increasing order.
///
/// Small factors are stripped by trial division, the cofactor is split with
/// Pollard's rho. Fails with [`Error::InvalidParameters`] when a composite
/// cofactor resists the iteration budget.
pub fn factorize<R: CryptoRng + RngCore>(n: &BigUint, rng: &mut R) -> Result<Vec<BigUint>> {
    let mut factors = Vec::new();
    let mut rest = n.clone();

    for &p in SMALL_PRIMES.iter() {
        if rest.is_one() {
            break;
        }
        if (&rest % p).is_zero() {
            factors.push(BigUint::from(p));
            while (&rest % p).is_zero() {
                rest /= p;
            }
        }
    }

    let mut pending = Vec::new();
    if !rest.is_one() && !rest.is_zero() {
        pending.push(rest);
    }
    while let Some(m) = pending.pop() {
        if is_probable_prime(&m, rng) {
            factors.push(m);
            continue;
        }
        let d = pollard_rho(&m, rng).ok_or_else(|| {
            Error::InvalidParameters(format!(
                "unable to factor a {}-bit component of the group order",
                m.bits()
            ))
        })?;
        pending.push(&m / &d);
        pending.push(d);
    }

    factors.sort();
    factors.dedup();
    Ok(factors)
}

// Floyd cycle detection on x -> x^2 + c, gcds batched
fn pollard_rho<R: CryptoRng + RngCore>(n: &BigUint, rng: &mut R) -> Option<BigUint> {
    let one = BigUint::one();

    for _ in 0..consts::RHO_ATTEMPTS {
        let c = rng.gen_biguint_range(&one, n);
        let step = |v: &BigUint| (v * v + &c) % n;

        let mut x = rng.gen_biguint_below(n);
        let mut y = x.clone();
        let mut iterations = 0;

        while iterations < consts::RHO_ITERATIONS {
            let (x_saved, y_saved) = (x.clone(), y.clone());
            let mut product = one.clone();
            for _ in 0..consts::RHO_BATCH {
                x = step(&x);
                y = step(&step(&y));
                product = mul_mod(&product, &abs_diff(&x, &y), n);
            }
            iterations += consts::RHO_BATCH;

            let d = gcd(&product, n);
            if d.is_one() {
                continue;
            }
            if d != *n {
                return Some(d);
            }

            // The batch collapsed onto n, replay it one gcd at a time.
            (x, y) = (x_saved, y_saved);
            for _ in 0..consts::RHO_BATCH {
                x = step(&x);
                y = step(&step(&y));
                let d = gcd(&abs_diff(&x, &y), n);
                if d.is_one() {
                    continue;
                }
                if d != *n {
                    return Some(d);
                }
                break;
            }
            break;
        }
    }
    None
}

fn find_generator<R: CryptoRng + RngCore>(
    rng: &mut R,
    modulus: &BigUint,
    order: &BigUint,
    factors: &[BigUint],
) -> Result<BigUint> {
    let two = BigUint::from(2u32);
    let cofactors: Vec<BigUint> = factors.iter().map(|l| order / l).collect();

    for _ in 0..consts::GENERATOR_ATTEMPTS {
        let g = rng.gen_biguint_range(&two, modulus);
        if cofactors.iter().all(|e| !pow(&g, e, modulus).is_one()) {
            return Ok(g);
        }
    }
    Err(Error::InvalidParameters(
        "no generator of full order found".to_string(),
    ))
}

impl ZipGroup<BigUint, BigUint> {
    /// Validate `modulus` and pick a generator of `Z_p^*`.
    ///
    /// The working order is `q = p - 1` and the generator is checked against
    /// every prime factor of `q`, so it has order exactly `q`.
    pub fn new_with_rng<R: CryptoRng + RngCore>(rng: &mut R, modulus: &BigUint) -> Result<Self> {
        if *modulus < BigUint::from(consts::MIN_MODULUS) {
            return Err(Error::InvalidParameters(format!(
                "modulus {} is below {}",
                modulus,
                consts::MIN_MODULUS
            )));
        }
        if !is_probable_prime(modulus, rng) {
            return Err(Error::InvalidParameters(format!(
                "the {}-bit modulus is not prime",
                modulus.bits()
            )));
        }

        let order = modulus - 1u32;
        let factors = factorize(&order, rng)?;
        let generator = find_generator(rng, modulus, &order, &factors)?;
        debug!(
            "Group over a {}-bit prime, order has {} distinct prime factors",
            modulus.bits(),
            factors.len()
        );

        Ok(ZipGroup {
            modulus: modulus.clone(),
            order,
            generator,
        })
    }
}
