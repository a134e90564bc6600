use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::arith::{inner_product, inv_mod, mul_mod, pow, random_scalar, reduce_vector};
use crate::error::{Error, Result};
use crate::generic::{ZipCiphertext, ZipFunctionalKey, ZipGroup, ZipMasterSecret};
use crate::hashing::payload_key;
use crate::traits::{PEAuthority, PECiphertext, PEFunctionalKey};

// Type aliases for the finite-field backend
pub type Group = ZipGroup<BigUint, BigUint>;
pub type MasterSecret = ZipMasterSecret<BigUint, BigUint>;
pub type FunctionalKey = ZipFunctionalKey<BigUint, BigUint>;
pub type Ciphertext = ZipCiphertext<BigUint>;

fn check_dimension(expected: usize, given: usize) -> Result<()> {
    if expected != given {
        return Err(Error::DimensionMismatch { expected, given });
    }
    Ok(())
}

/*
    Implements traits defined in traits.rs
*/
impl PEAuthority<BigUint, BigUint> for MasterSecret {
    type FunctionalKey = FunctionalKey;
    type Ciphertext = Ciphertext;

    fn setup_with_rng<R: CryptoRng + RngCore>(
        rng: &mut R,
        modulus: &BigUint,
        length: i64,
    ) -> Result<Self> {
        let length = usize::try_from(length)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                Error::InvalidParameters(format!("vector length must be positive, got {length}"))
            })?;

        let group = Group::new_with_rng(rng, modulus)?;

        // Init secrets and their bases g^s[i]
        let secrets: Vec<BigUint> = (0..length)
            .map(|_| random_scalar(rng, &group.order))
            .collect();
        let bases = secrets
            .iter()
            .map(|s_i| pow(&group.generator, s_i, &group.modulus))
            .collect();
        debug!("Master secret ready for vectors of {} coordinates", length);

        Ok(ZipMasterSecret {
            group,
            secrets,
            bases,
        })
    }

    fn group(&self) -> &Group {
        &self.group
    }

    fn length(&self) -> usize {
        self.secrets.len()
    }

    fn key_gen<V: Clone>(&self, policy: &[V]) -> Result<FunctionalKey>
    where
        BigInt: From<V>,
    {
        check_dimension(self.length(), policy.len())?;

        let policy = reduce_vector(policy, &self.group.order);
        let skf = inner_product(&policy, &self.secrets, &self.group.order);

        Ok(ZipFunctionalKey {
            group: self.group.clone(),
            skf,
            policy,
        })
    }

    fn encrypt_with_rng<R: CryptoRng + RngCore, V: Clone>(
        &self,
        rng: &mut R,
        attributes: &[V],
        message: &[u8],
    ) -> Result<Ciphertext>
    where
        BigInt: From<V>,
    {
        check_dimension(self.length(), attributes.len())?;
        let Group {
            modulus: p,
            order: q,
            generator: g,
        } = &self.group;

        let x = reduce_vector(attributes, q);
        let r = random_scalar(rng, q);

        // c0 = g^r, masked[i] = h[i]^r * g^x[i] = g^(r*s[i] + x[i])
        let c0 = pow(g, &r, p);
        let masked: Vec<BigUint> = self
            .bases
            .iter()
            .zip(&x)
            .map(|(h_i, x_i)| mul_mod(&pow(h_i, &r, p), &pow(g, x_i, p), p))
            .collect();

        let key = payload_key(p, &c0, &masked, &x);
        let payload = ske::encrypt_with_rng(rng, &key[..], message)?;
        trace!("Encrypted {} bytes under {} attributes", message.len(), x.len());

        Ok(ZipCiphertext { c0, masked, payload })
    }
}

impl PEFunctionalKey for FunctionalKey {
    type Ciphertext = Ciphertext;

    fn length(&self) -> usize {
        self.policy.len()
    }

    fn decrypt<V: Clone>(&self, attributes: &[V], ct: &Ciphertext) -> Result<Vec<u8>>
    where
        BigInt: From<V>,
    {
        check_dimension(self.length(), attributes.len())?;
        check_dimension(self.length(), ct.masked.len())?;
        let Group {
            modulus: p,
            order: q,
            ..
        } = &self.group;

        let x = reduce_vector(attributes, q);

        // prod(masked[i]^f[i]) / c0^skf = g^<f, x>
        let d = ct
            .masked
            .iter()
            .zip(&self.policy)
            .fold(BigUint::one(), |acc, (m_i, f_i)| {
                mul_mod(&acc, &pow(m_i, f_i, p), p)
            });
        let mask = pow(&ct.c0, &self.skf, p);
        let quotient = mul_mod(&d, &inv_mod(&mask, p)?, p);
        let satisfied = quotient.is_one();

        // The payload is opened whatever the predicate outcome
        let key = payload_key(p, &ct.c0, &ct.masked, &x);
        let opened = ske::decrypt(&key[..], &ct.payload);

        if !satisfied {
            debug!("Predicate rejected the ciphertext");
            return Err(Error::PredicateNotSatisfied);
        }
        Ok(opened?)
    }
}

impl PECiphertext<BigUint> for Ciphertext {
    fn get_c0(&self) -> &BigUint {
        &self.c0
    }

    fn get_masked(&self) -> &[BigUint] {
        &self.masked
    }

    fn get_payload(&self) -> &[u8] {
        &self.payload
    }
}
