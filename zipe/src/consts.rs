//! Group constants.

/// Smallest prime accepted as a group modulus.
pub(crate) const MIN_MODULUS: u32 = 3;

/// Toy modulus, only suited for tests.
pub(crate) const TOY_PRIME: u32 = 1009;

/// 2^128 - 159, the largest 128-bit prime.
pub(crate) const P128_SHIFT: u32 = 128;
pub(crate) const P128_OFFSET: u32 = 159;

/// RFC 3526 group 14 (2048-bit MODP safe prime), little-endian u32 limbs.
pub(crate) const MODP_2048_PRIME: [u32; 64] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0x8AACAA68, 0x15728E5A, 0x98FA0510, 0x15D22618,
    0xEA956AE5, 0x3995497C, 0x95581718, 0xDE2BCBF6, 0x6F4C52C9, 0xB5C55DF0,
    0xEC07A28F, 0x9B2783A2, 0x180E8603, 0xE39E772C, 0x2E36CE3B, 0x32905E46,
    0xCA18217C, 0xF1746C08, 0x4ABC9804, 0x670C354E, 0x7096966D, 0x9ED52907,
    0x208552BB, 0x1C62F356, 0xDCA3AD96, 0x83655D23, 0xFD24CF5F, 0x69163FA8,
    0x1C55D39A, 0x98DA4836, 0xA163BF05, 0xC2007CB8, 0xECE45B3D, 0x49286651,
    0x7C4B1FE6, 0xAE9F2411, 0x5A899FA5, 0xEE386BFB, 0xF406B7ED, 0x0BFF5CB6,
    0xA637ED6B, 0xF44C42E9, 0x625E7EC6, 0xE485B576, 0x6D51C245, 0x4FE1356D,
    0xF25F1437, 0x302B0A6D, 0xCD3A431B, 0xEF9519B3, 0x8E3404DD, 0x514A0879,
    0x3B139B22, 0x020BBEA6, 0x8A67CC74, 0x29024E08, 0x80DC1CD1, 0xC4C6628B,
    0x2168C234, 0xC90FDAA2, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// Trial division and factorization sieve bound.
pub(crate) const SMALL_PRIME_BOUND: usize = 1 << 16;
/// How many of the small primes are tried before Miller-Rabin.
pub(crate) const PRIMALITY_TRIAL_PRIMES: usize = 256;
pub(crate) const MILLER_RABIN_ROUNDS: usize = 32;

pub(crate) const RHO_ATTEMPTS: usize = 4;
pub(crate) const RHO_ITERATIONS: usize = 1 << 18;
pub(crate) const RHO_BATCH: usize = 128;

pub(crate) const GENERATOR_ATTEMPTS: usize = 256;
