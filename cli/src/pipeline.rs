use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use num_bigint::BigInt;
use zipe::traits::{PEAuthority, PECiphertext, PEFunctionalKey};
use zipe::{Ciphertext, FunctionalKey, MasterSecret, Preset};

pub struct Pipeline {
    msk: MasterSecret,
}

impl Pipeline {
    pub fn new(preset: Preset, length: i64) -> Result<Self> {
        let msk = MasterSecret::setup(&preset.modulus(), length)
            .context("Unable to set up the authority")?;
        Ok(Self { msk })
    }

    /// Vectors of the benchmark: f = [1, ..., 1] and x = [1, 2, ..., n - 1, -(n(n - 1) / 2)]
    fn vectors(&self) -> (Vec<BigInt>, Vec<BigInt>) {
        let n = self.msk.length();
        let policy = vec![BigInt::from(1u8); n];
        let mut attributes: Vec<BigInt> = (1..=n).map(BigInt::from).collect();
        attributes[n - 1] = -BigInt::from(n * (n - 1) / 2);
        (policy, attributes)
    }

    pub fn run(&self, message: &[u8], mismatch: bool) -> Result<Vec<u8>> {
        let (mut policy, attributes) = self.vectors();
        if mismatch {
            policy[0] += BigInt::from(1u8);
        }

        let sk = self.msk.key_gen(&policy)?;
        info!("Derived functional key");

        info!("Encrypting {} bytes", message.len());
        let ct = self.msk.encrypt(&attributes, message)?;
        debug!(
            "Ciphertext carries {} masked coordinates and a {} byte payload",
            ct.get_masked().len(),
            ct.get_payload().len()
        );

        // Ship key and ciphertext to the decrypting party
        let sk_bytes = postcard::to_stdvec(&sk)?;
        let ct_bytes = postcard::to_stdvec(&ct)?;
        info!(
            "Sending {} key bytes and {} ciphertext bytes",
            sk_bytes.len(),
            ct_bytes.len()
        );
        let sk: FunctionalKey = postcard::from_bytes(&sk_bytes)?;
        let ct: Ciphertext = postcard::from_bytes(&ct_bytes)?;

        sk.decrypt(&attributes, &ct)
            .map_err(|e| anyhow!("Decryption failed: {}", e))
    }
}
