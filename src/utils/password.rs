//! Password hashing.
//!
//! Passwords are stored as `pbkdf2_sha256$<rounds>$<salt hex>$<hash hex>`,
//! derived with PBKDF2-HMAC-SHA256 over a random 16-byte salt.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

pub const SCHEME: &str = "pbkdf2_sha256";
pub const ROUNDS: u32 = 29_000;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Hashes a raw password with a fresh random salt.
pub fn hash_password(raw: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    encode(raw, &salt, ROUNDS)
}

fn encode(raw: &str, salt: &[u8], rounds: u32) -> String {
    let mut hash = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(raw.as_bytes(), salt, rounds, &mut hash);

    format!(
        "{SCHEME}${rounds}${}${}",
        hex::encode(salt),
        hex::encode(hash)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(stored: &str) -> Vec<&str> {
        stored.split('$').collect()
    }

    #[test]
    fn test_hash_format() {
        let stored = hash_password("admin");
        let parts = parts(&stored);

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], SCHEME);
        assert_eq!(parts[1], ROUNDS.to_string());
        assert_eq!(parts[2].len(), SALT_LEN * 2);
        assert_eq!(parts[3].len(), HASH_LEN * 2);
    }

    #[test]
    fn test_hash_never_contains_raw_password() {
        let stored = hash_password("hunter2");
        assert!(!stored.contains("hunter2"));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        assert_ne!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn test_hash_rederives_from_salt() {
        let stored = hash_password("secret");
        let parts = parts(&stored);
        let salt = hex::decode(parts[2]).unwrap();

        assert_eq!(encode("secret", &salt, ROUNDS), stored);
        assert_ne!(encode("other", &salt, ROUNDS), stored);
    }
}
