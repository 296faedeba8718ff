//! The crate's randomness source. Production code should inject
//! [`rand::rngs::OsRng`] (or any other `RngCore + CryptoRng`); this module
//! only adds a deterministic stand-in for tests. Tests may substitute this
//! replacement keyed by a fixed seed; production code must not.

use rand_core::{CryptoRng, Error as RandError, RngCore};

/// A deterministic, test-only source of "random" bytes: replays a fixed byte
/// string, wrapping around if more bytes are requested than it holds.
///
/// `keygen`/`encapsulate` take the RNG as a generic `R: RngCore + CryptoRng`
/// parameter at the call site rather than through a bespoke port trait, so
/// any `RngCore + CryptoRng` works here, including this one.
pub struct ReplayRng<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ReplayRng<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        assert!(!bytes.is_empty(), "ReplayRng needs at least one byte to replay");
        ReplayRng { bytes, pos: 0 }
    }
}

impl RngCore for ReplayRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// Marking this as a `CryptoRng` is a test-only fiction: a replayed byte
// string is not cryptographically secure. Never construct a `ReplayRng` in
// production code.
impl CryptoRng for ReplayRng<'_> {}
