//! Argon2id credential hashing and verification.

use std::sync::{Arc, OnceLock};

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::{OsRng, RngCore},
    },
};
use tracing::{debug, warn};

use docbook_core::config::HashingConfig;
use docbook_core::error::AppError;

/// Produces and checks one-way credential hashes.
///
/// Every hash is a PHC string (`$argon2id$v=19$m=..,t=..,p=..$salt$digest`)
/// carrying its own salt and parameters, so verification needs nothing but
/// the stored string. The `cost` passed to [`hash`](Self::hash) is the
/// Argon2 time cost; memory and parallelism come from configuration.
#[derive(Debug, Clone)]
pub struct CredentialProvisioner {
    config: HashingConfig,
    /// Hash verified against when no account matches a login attempt.
    decoy: Arc<OnceLock<Option<String>>>,
}

/// Salt length in bytes, before base64 encoding.
const SALT_LEN: usize = 16;

/// Plaintext behind the decoy hash. Never stored for any account.
const DECOY_PLAINTEXT: &str = "docbook-decoy-credential";

impl CredentialProvisioner {
    /// Creates a provisioner with the given hashing parameters.
    pub fn new(config: HashingConfig) -> Self {
        Self {
            config,
            decoy: Arc::new(OnceLock::new()),
        }
    }

    /// The work factor used by [`hash_default`](Self::hash_default).
    pub fn default_cost(&self) -> u32 {
        self.config.default_cost
    }

    /// Hashes a plaintext credential with a fresh random salt.
    ///
    /// Rejects an empty plaintext or a zero cost with a validation error.
    /// Any failure inside the primitive is a `HashingFailure`.
    pub fn hash(&self, plaintext: &str, cost: u32) -> Result<String, AppError> {
        if plaintext.is_empty() {
            return Err(AppError::validation("Credential must not be empty"));
        }
        if cost == 0 {
            return Err(AppError::validation("Hashing cost must be at least 1"));
        }

        let argon2 = self.argon2(cost)?;
        let salt = generate_salt(&mut OsRng)?;

        let hash = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hashing failed: {e}")))?;

        debug!(cost, "Credential hashed");
        Ok(hash.to_string())
    }

    /// Hashes with the configured default cost.
    pub fn hash_default(&self, plaintext: &str) -> Result<String, AppError> {
        self.hash(plaintext, self.config.default_cost)
    }

    /// Verifies a plaintext credential against a stored hash.
    ///
    /// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch. The
    /// digest comparison is constant-time. A stored value that is not a
    /// valid PHC string is a `HashingFailure`.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::hashing(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::hashing(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Spends the same work as a real verification against a hash that no
    /// account owns. Used when a login names an unknown account.
    pub fn verify_decoy(&self, plaintext: &str) {
        let decoy = self.decoy.get_or_init(|| {
            self.hash_default(DECOY_PLAINTEXT)
                .inspect_err(|e| warn!(error = %e, "Decoy hash unavailable"))
                .ok()
        });

        if let Some(hash) = decoy {
            let _ = self.verify(plaintext, hash);
        }
    }

    /// Whether the decoy hash has been computed.
    pub fn has_decoy(&self) -> bool {
        matches!(self.decoy.get(), Some(Some(_)))
    }

    /// Checks whether a stored hash is weaker than the current policy at
    /// the given cost.
    ///
    /// Hashes with a higher time cost or more memory than policy are kept
    /// as they are.
    pub fn needs_rehash(&self, stored_hash: &str, cost: u32) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return true;
        };

        if parsed.algorithm != argon2::ARGON2ID_IDENT {
            return true;
        }

        let params = &parsed.params;
        let below = |key: &str, floor: u32| params.get_decimal(key).is_none_or(|v| v < floor);

        below("m", self.config.memory_cost_kib)
            || below("t", cost)
            || params.get_decimal("p") != Some(self.config.parallelism)
    }

    fn argon2(&self, cost: u32) -> Result<Argon2<'static>, AppError> {
        let params = Params::new(
            self.config.memory_cost_kib,
            cost,
            self.config.parallelism,
            None,
        )
        .map_err(|e| AppError::hashing(format!("Invalid hashing parameters: {e}")))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Builds a random salt, surfacing entropy failures instead of panicking.
fn generate_salt(rng: &mut impl RngCore) -> Result<SaltString, AppError> {
    let mut bytes = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::hashing(format!("Entropy source failed: {e}")))?;

    SaltString::encode_b64(&bytes)
        .map_err(|e| AppError::hashing(format!("Salt encoding failed: {e}")))
}

impl Default for CredentialProvisioner {
    fn default() -> Self {
        Self::new(HashingConfig::default())
    }
}
