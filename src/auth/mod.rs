//! Password hashing and verification.
//!
//! Passwords are stored as bcrypt hashes. The hash string carries algorithm,
//! cost and salt, so verification works for any cost a hash was made with.

use crate::errors::AppError;

/// bcrypt work factor for new hashes. Lowering it weakens every new account.
pub const BCRYPT_COST: u32 = 10;

/// Hash a cleartext password with a fresh salt.
///
/// bcrypt is CPU-bound, so the work runs on the blocking pool.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Check a cleartext password against a stored hash.
///
/// A malformed or empty stored hash is a mismatch, never an error.
pub async fn verify_password(password: &str, stored_hash: &str) -> bool {
    if stored_hash.is_empty() {
        return false;
    }

    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    match tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash)).await {
        Ok(Ok(matches)) => matches,
        Ok(Err(e)) => {
            tracing::warn!("Stored password hash is not usable: {}", e);
            false
        }
        Err(e) => {
            tracing::error!("Verification task failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hash = hash_password("hunter2").await.unwrap();

        assert!(verify_password("hunter2", &hash).await);
        assert!(!verify_password("hunter3", &hash).await);
        assert!(!verify_password("", &hash).await);
    }

    #[tokio::test]
    async fn test_hash_is_salted_and_self_describing() {
        let first = hash_password("same").await.unwrap();
        let second = hash_password("same").await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$2b$10$"));
        assert_eq!(first.len(), 60);
    }

    #[tokio::test]
    async fn test_verify_accepts_other_costs() {
        let cheap = bcrypt::hash("pw", 4).unwrap();
        assert!(verify_password("pw", &cheap).await);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_rejected() {
        assert!(!verify_password("pw", "").await);
        assert!(!verify_password("pw", "not-a-hash").await);
        assert!(!verify_password("pw", "$2b$10$tooshort").await);
    }
}
