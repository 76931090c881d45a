use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

#[derive(Debug)]
pub enum Error {
    HashFailed,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|err| {
        tracing::error!("Failed to gather salt entropy: {}", err);
        Error::HashFailed
    })?;
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|err| {
        tracing::error!("Failed to encode password salt: {}", err);
        Error::HashFailed
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::HashFailed
        })
}

pub fn verify(phc: &str, password: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_original_password_only() {
        let phc = hash("open-sesame").unwrap();
        assert!(verify(&phc, "open-sesame"));
        assert!(!verify(&phc, "open-sesame "));
    }

    #[test]
    fn salts_every_hash() {
        assert_ne!(hash("pepper").unwrap(), hash("pepper").unwrap());
    }

    #[test]
    fn garbage_hashes_never_verify() {
        assert!(!verify("not-a-phc-string", "anything"));
    }
}
