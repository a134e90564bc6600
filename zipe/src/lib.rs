#![warn(rust_2018_idioms)]

//! Secret-key predicate encryption for the zero inner-product predicate.
//!
//! An authority holding a [`MasterSecret`] of dimension `n` hands out
//! [`FunctionalKey`]s bound to policy vectors `f` and encrypts messages under
//! attribute vectors `x`. A functional key opens a [`Ciphertext`] only when
//! `<f, x> = 0` modulo the order of the group.
//!
//! ```rust
//! use zipe::traits::{PEAuthority, PEFunctionalKey};
//! use zipe::{Error, MasterSecret, Preset};
//!
//! let msk = MasterSecret::setup(&Preset::Toy.modulus(), 5).unwrap();
//!
//! // <f, x> = 1 + 2 + 3 + 4 - 10 = 0
//! let x = [1, 2, 3, 4, -10];
//! let ct = msk.encrypt(&x, b"Hello, ABE!").unwrap();
//!
//! let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
//! assert_eq!(sk.decrypt(&x, &ct).unwrap(), b"Hello, ABE!");
//!
//! // <f, x> = 1
//! let sk = msk.key_gen(&[1, 0, 0, 0, 0]).unwrap();
//! assert_eq!(sk.decrypt(&x, &ct), Err(Error::PredicateNotSatisfied));
//! ```

pub mod arith;
mod consts;
mod error;
mod ff_zip;
mod generic;
pub mod group;
mod hashing;
pub mod traits;

pub use error::{Error, Result};
pub use ff_zip::*;
pub use generic::{ZipCiphertext, ZipFunctionalKey, ZipGroup, ZipMasterSecret};
pub use group::Preset;

#[cfg(test)]
mod tests {
    use super::traits::*;
    use super::*;
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use proptest::test_runner::{Config, TestError, TestRunner};

    const MESSAGE: &[u8] = b"Hello, ABE!";
    const N: usize = 8;

    fn toy_instance(length: i64) -> MasterSecret {
        MasterSecret::setup(&Preset::Toy.modulus(), length).unwrap()
    }

    // f ends with 1 and x ends with the value cancelling the prefix
    prop_compose! {
        fn orthogonal_vectors()(policy in prop::collection::vec(-1000i64..1000, N - 1),
                                attributes in prop::collection::vec(-1000i64..1000, N - 1))
                               -> (Vec<i64>, Vec<i64>) {
            let prefix: i64 = policy.iter().zip(&attributes).map(|(f, x)| f * x).sum();
            let mut policy = policy;
            let mut attributes = attributes;
            policy.push(1);
            attributes.push(-prefix);
            (policy, attributes)
        }
    }
    prop_compose! {
        fn skewed_vectors()((policy, attributes) in orthogonal_vectors(), offset in 1i64..1000)
                           -> (Vec<i64>, Vec<i64>) {
            let mut attributes = attributes;
            attributes[N - 1] += offset;
            (policy, attributes)
        }
    }

    fn check(result: std::result::Result<(), TestError<(Vec<i64>, Vec<i64>)>>) {
        match result {
            Ok(()) => (),
            Err(TestError::Fail(reason, value)) => {
                panic!("Found failing case {:?}: {}", value, reason)
            }
            result => panic!("Unexpected result {:?}", result),
        }
    }

    #[test]
    fn test_orthogonal_vectors_decrypt() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();

        let ct = msk.encrypt(&x, MESSAGE).unwrap();
        assert_eq!(sk.decrypt(&x, &ct).unwrap(), MESSAGE);
    }

    #[test]
    fn test_non_orthogonal_vectors_rejected() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 0, 0, 0, 0]).unwrap();

        let ct = msk.encrypt(&x, MESSAGE).unwrap();
        assert_eq!(sk.decrypt(&x, &ct), Err(Error::PredicateNotSatisfied));
    }

    #[test]
    fn test_invalid_parameters() {
        let p = Preset::Toy.modulus();
        for length in [-1, 0] {
            assert!(matches!(
                MasterSecret::setup(&p, length),
                Err(Error::InvalidParameters(_))
            ));
        }
        assert!(matches!(
            MasterSecret::setup(&BigUint::from(1000u32), 5),
            Err(Error::InvalidParameters(_))
        ));

        let msk = toy_instance(5);
        let too_long = [1i64; 6];
        assert_eq!(
            msk.key_gen(&too_long).unwrap_err(),
            Error::DimensionMismatch {
                expected: 5,
                given: 6
            }
        );
        assert_eq!(
            msk.encrypt(&too_long, MESSAGE).unwrap_err(),
            Error::DimensionMismatch {
                expected: 5,
                given: 6
            }
        );
    }

    #[test]
    fn test_decrypt_dimension_mismatch() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let ct = msk.encrypt(&x, MESSAGE).unwrap();

        assert_eq!(
            sk.decrypt(&x[..4], &ct),
            Err(Error::DimensionMismatch {
                expected: 5,
                given: 4
            })
        );

        let mut truncated = ct.clone();
        truncated.masked.pop();
        assert_eq!(
            sk.decrypt(&x, &truncated),
            Err(Error::DimensionMismatch {
                expected: 5,
                given: 4
            })
        );

        let other = toy_instance(4);
        let ct = other.encrypt(&x[..4], MESSAGE).unwrap();
        assert!(matches!(
            sk.decrypt(&x[..4], &ct),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_tampered_payload() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let ct = msk.encrypt(&x, MESSAGE).unwrap();

        for i in 0..ct.get_payload().len() {
            let mut tampered = ct.clone();
            tampered.payload[i] ^= 0x01;
            assert_eq!(
                sk.decrypt(&x, &tampered),
                Err(Error::AuthenticationFailure)
            );
        }

        let mut truncated = ct.clone();
        truncated.payload.truncate(ske::NONCE_LENGTH - 1);
        assert_eq!(
            sk.decrypt(&x, &truncated),
            Err(Error::AuthenticationFailure)
        );
    }

    #[test]
    fn test_tampered_header() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let ct = msk.encrypt(&x, MESSAGE).unwrap();
        let p = msk.group().modulus();

        let mut tampered = ct.clone();
        tampered.masked[2] = (&tampered.masked[2] * 2u32) % p;
        assert!(sk.decrypt(&x, &tampered).is_err());

        let mut tampered = ct.clone();
        tampered.c0 = (&tampered.c0 * 3u32) % p;
        assert!(sk.decrypt(&x, &tampered).is_err());
    }

    #[test]
    fn test_payload_bound_to_attributes() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let ct = msk.encrypt(&x, MESSAGE).unwrap();

        // Still orthogonal to f but not the vector the ciphertext was made for
        let other = [2, 2, 2, 4, -10];
        assert_eq!(
            sk.decrypt(&other, &ct),
            Err(Error::AuthenticationFailure)
        );
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();

        let ct1 = msk.encrypt(&x, MESSAGE).unwrap();
        let ct2 = msk.encrypt(&x, MESSAGE).unwrap();
        // Over 1009 a collision of c0 happens once in a thousand, the nonce does not collide
        assert_ne!(ct1.get_payload(), ct2.get_payload());
        assert_ne!(ct1, ct2);

        assert_eq!(sk.decrypt(&x, &ct1).unwrap(), MESSAGE);
        assert_eq!(sk.decrypt(&x, &ct2).unwrap(), MESSAGE);
    }

    #[test]
    fn test_key_gen_is_deterministic() {
        let msk = toy_instance(5);
        let sk1 = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let sk2 = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        assert_eq!(sk1, sk2);

        // f and f + q reduce to the same key
        let shifted = [1, 1, 1, 1, 1 + 1008];
        assert_eq!(msk.key_gen(&shifted).unwrap(), sk1);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let msk = toy_instance(5);
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        assert_eq!(format!("{:?}", msk), "ZipMasterSecret { length: 5, .. }");
        assert_eq!(format!("{:?}", sk), "ZipFunctionalKey { length: 5, .. }");
    }

    #[test]
    fn test_transfer() {
        let msk = toy_instance(5);
        let x = [1, 2, 3, 4, -10];
        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        let ct = msk.encrypt(&x, MESSAGE).unwrap();

        // Simulate network transfer
        let sk_back: FunctionalKey = postcard::from_bytes(&postcard::to_stdvec(&sk).unwrap()).unwrap();
        let ct_back: Ciphertext = postcard::from_bytes(&postcard::to_stdvec(&ct).unwrap()).unwrap();
        assert_eq!(ct_back, ct);
        assert_eq!(sk_back.decrypt(&x, &ct_back).unwrap(), MESSAGE);
    }

    #[test]
    fn test_large_modulus() {
        let msk = MasterSecret::setup(&Preset::P128.modulus(), 5).unwrap();
        let x = [1, 2, 3, 4, -10];
        let ct = msk.encrypt(&x, MESSAGE).unwrap();

        let sk = msk.key_gen(&[1, 1, 1, 1, 1]).unwrap();
        assert_eq!(sk.decrypt(&x, &ct).unwrap(), MESSAGE);

        let sk = msk.key_gen(&[1, 0, 0, 0, 0]).unwrap();
        assert_eq!(sk.decrypt(&x, &ct), Err(Error::PredicateNotSatisfied));
    }

    #[test]
    fn test_correctness() {
        let mut runner = TestRunner::new(Config::with_cases(32));
        let msk = toy_instance(N as i64);

        check(runner.run(&orthogonal_vectors(), |(policy, attributes)| {
            let sk = msk.key_gen(&policy).unwrap();
            let ct = msk.encrypt(&attributes, MESSAGE).unwrap();
            prop_assert_eq!(sk.decrypt(&attributes, &ct).unwrap(), MESSAGE);
            Ok(())
        }));
    }

    #[test]
    fn test_rejection() {
        let mut runner = TestRunner::new(Config::with_cases(32));
        let msk = toy_instance(N as i64);

        // offsets stay below the order 1008, the inner product is never 0 mod q
        check(runner.run(&skewed_vectors(), |(policy, attributes)| {
            let sk = msk.key_gen(&policy).unwrap();
            let ct = msk.encrypt(&attributes, MESSAGE).unwrap();
            prop_assert_eq!(
                sk.decrypt(&attributes, &ct),
                Err(Error::PredicateNotSatisfied)
            );
            Ok(())
        }));
    }
}
