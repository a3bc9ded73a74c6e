use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister. Integer seeds are split into little-endian
/// 32-bit key words and fed through `init_by_array`, so recorded seeds
/// replay the same shuffles.
#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    pub fn from_u64(seed: u64) -> Self {
        let low = seed as u32;
        let high = (seed >> 32) as u32;
        if high == 0 {
            Self::from_key(&[low])
        } else {
            Self::from_key(&[low, high])
        }
    }

    fn from_scalar(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn from_key(key: &[u32]) -> Self {
        let mut mt = Self::from_scalar(19_650_218);
        let state = &mut mt.state;
        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(key.len()) {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        state[0] = UPPER_MASK;
        mt
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }

    pub fn next_word(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform value in `0..bound` by bit-length rejection sampling.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        let bits = 32 - bound.leading_zeros();
        loop {
            let value = self.next_word() >> (32 - bits);
            if value < bound {
                return value;
            }
        }
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Supplies a seed when a round is started without one.
pub trait SeedSource: std::fmt::Debug {
    fn next_seed(&mut self) -> u64;
}

/// Nanoseconds since the Unix epoch, folded into 64 bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSeed;

impl SeedSource for SystemTimeSeed {
    fn next_seed(&mut self) -> u64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0);
        (nanos as u64) ^ ((nanos >> 64) as u64)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: Mt19937,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Mt19937::from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fisher-Yates from the back, `j` drawn from `0..=i`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_words() {
        let mut rng = Mt19937::from_u64(1234);
        assert_eq!(rng.next_word(), 4_150_886_329);
        assert_eq!(rng.next_word(), 3_342_196_574);
        assert_eq!(rng.next_word(), 1_892_932_127);

        let mut rng = Mt19937::from_u64(0);
        assert_eq!(rng.next_word(), 3_626_764_237);
        assert_eq!(rng.next_word(), 1_654_615_998);
    }

    #[test]
    fn rng_core_composes_words() {
        let mut words = Mt19937::from_u64(1234);
        let mut core = Mt19937::from_u64(1234);
        let low = u64::from(words.next_word());
        let high = u64::from(words.next_word());
        assert_eq!(core.next_u64(), (high << 32) | low);

        let mut bytes = [0u8; 6];
        core.fill_bytes(&mut bytes);
        let third = words.next_word().to_le_bytes();
        let fourth = words.next_word().to_le_bytes();
        assert_eq!(bytes[..4], third);
        assert_eq!(bytes[4..], fourth[..2]);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Mt19937::from_u64(7);
        for bound in 1..60u32 {
            for _ in 0..20 {
                assert!(rng.below(bound) < bound);
            }
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();
        RngState::from_seed(99).shuffle(&mut a);
        RngState::from_seed(99).shuffle(&mut b);
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn fixed_seed_source_repeats() {
        let mut source = FixedSeed(42);
        assert_eq!(source.next_seed(), 42);
        assert_eq!(source.next_seed(), 42);
    }
}
