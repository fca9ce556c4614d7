//! Short code generation.
//!
//! Codes are 8 characters drawn uniformly from the 62-symbol alphanumeric
//! alphabet. The generator is a pseudo-random source seeded once from the
//! system clock; it is neither cryptographically secure nor collision-free.
//! Uniqueness is enforced by the store, not here.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Alphabet used for generated codes.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 8;

/// Source of candidate short codes.
///
/// Implementations must be safe to call from many request tasks at once.
pub trait CodeGenerator: Send + Sync {
    /// Returns a new candidate short code.
    fn generate(&self) -> String;
}

/// Pseudo-random code generator owned by the application state.
///
/// Holds a single [`StdRng`] behind a mutex. The lock is held only for the
/// eight draws of one code.
pub struct RandomCodeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomCodeGenerator {
    /// Creates a generator seeded from the current time in nanoseconds.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        Self::with_seed(nanos)
    }

    /// Creates a generator with a fixed seed. Two generators with the same
    /// seed produce the same sequence of codes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_charset_has_62_symbols() {
        assert_eq!(CHARSET.len(), 62);
        let unique: HashSet<_> = CHARSET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let generator = RandomCodeGenerator::new();
        assert_eq!(generator.generate().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        let generator = RandomCodeGenerator::new();
        for _ in 0..500 {
            let code = generator.generate();
            assert!(is_well_formed(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let generator = RandomCodeGenerator::new();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = RandomCodeGenerator::with_seed(42);
        let b = RandomCodeGenerator::with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = RandomCodeGenerator::with_seed(1);
        let b = RandomCodeGenerator::with_seed(2);
        assert_ne!(a.generate(), b.generate());
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(RandomCodeGenerator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..100).map(|_| generator.generate()).collect::<Vec<_>>())
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for code in handle.join().unwrap() {
                assert!(is_well_formed(&code));
                all.insert(code);
            }
        }

        assert_eq!(all.len(), 800);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("abcD1234"));
        assert!(!is_well_formed("abc123"));
        assert!(!is_well_formed("abcd-123"));
        assert!(!is_well_formed("abcd12345"));
        assert!(!is_well_formed(""));
    }
}
