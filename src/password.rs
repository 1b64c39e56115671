use bcrypt::{hash, verify, DEFAULT_COST};

/// Salted one-way password hashing around bcrypt. Two calls to [`derive`]
/// with the same plaintext yield different strings (fresh salt per call);
/// only [`matches`] can relate a plaintext back to a stored hash.
///
/// [`derive`]: PasswordHasher::derive
/// [`matches`]: PasswordHasher::matches
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost from `KALAKRITI_BCRYPT_COST`, falling back to the bcrypt default.
    pub fn from_env() -> Self {
        let cost = std::env::var("KALAKRITI_BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COST);
        Self { cost }
    }

    pub fn derive(&self, plaintext: &str) -> Result<String, bcrypt::BcryptError> {
        hash(plaintext, self.cost)
    }

    /// True iff `plaintext` reproduces `stored`. A malformed stored hash is
    /// "no match", never an error on the login path.
    pub fn matches(&self, plaintext: &str, stored: &str) -> bool {
        verify(plaintext, stored).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn derive_then_matches_roundtrip() {
        let h = hasher();
        let stored = h.derive("secret1").unwrap();
        assert!(h.matches("secret1", &stored));
        assert!(!h.matches("secret2", &stored));
    }

    #[test]
    fn derive_salts_freshly() {
        let h = hasher();
        let a = h.derive("same").unwrap();
        let b = h.derive("same").unwrap();
        assert_ne!(a, b);
        assert!(h.matches("same", &a));
        assert!(h.matches("same", &b));
    }

    #[test]
    fn malformed_hash_is_no_match() {
        let h = hasher();
        assert!(!h.matches("anything", "not-a-bcrypt-hash"));
        assert!(!h.matches("anything", ""));
    }
}
