//! Random fixture filename synthesis

use rand::Rng;

/// Hex alphabet the random names are drawn from
const HEX_ALPHABET: &[u8] = b"0123456789abcdef";

/// Number of random characters in a generated name, before the suffix
const NAME_LEN: usize = 16;

/// Suffix appended to every generated input-file name
pub const DAT_SUFFIX: &str = ".dat";

/// Generates a random fixture filename: 16 lowercase hex characters plus
/// a `.dat` suffix.
///
/// Each character is drawn independently and uniformly, giving 64 bits of
/// entropy. Collision resistance is probabilistic only; no uniqueness check
/// is performed against the filesystem.
pub fn random_dat_name() -> String {
    let mut rng = rand::thread_rng();
    let mut name = String::with_capacity(NAME_LEN + DAT_SUFFIX.len());

    for _ in 0..NAME_LEN {
        let idx = rng.gen_range(0..HEX_ALPHABET.len());
        name.push(HEX_ALPHABET[idx] as char);
    }

    name.push_str(DAT_SUFFIX);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_shape() {
        for _ in 0..1000 {
            let name = random_dat_name();
            assert_eq!(name.len(), 20);
            assert!(name.ends_with(".dat"));
            assert!(name[..16].chars().all(|c| c.is_ascii_hexdigit()
                && (c.is_ascii_digit() || c.is_ascii_lowercase())));
        }
    }

    #[test]
    fn test_collisions_are_negligible() {
        let names: HashSet<String> = (0..10_000).map(|_| random_dat_name()).collect();
        // 64 bits of entropy: 10k draws should essentially never collide
        assert!(names.len() >= 9_999);
    }
}
