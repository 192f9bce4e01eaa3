//! Credential store over the state store.
//!
//! Users live under the `users` state key as `{email, name, passwordHash}`
//! records keyed by lowercased email; the signed-in user under
//! `currentUser`. Passwords are stored salted:
//! `hex(salt) $ hex(sha256(salt || password))`.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::state::{keys, StateStore};

const SALT_LEN: usize = 16;

/// The publicly visible part of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    email: String,
    name: String,
    #[serde(rename = "passwordHash")]
    password_hash: String,
}

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn new_password_hash(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    format!("{}${}", hex::encode(salt), digest(&salt, password))
}

fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    digest(&salt, password) == expected
}

/// Register a new account and sign it in.
///
/// # Errors
///
/// [`AuthError::EmailTaken`] when the lowercased email already exists.
pub fn sign_up(
    store: &mut StateStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let key = email.trim().to_lowercase();
    let mut users: Map<String, Value> = store.get(keys::USERS, Map::new());
    if users.contains_key(&key) {
        return Err(AuthError::EmailTaken);
    }
    let record = UserRecord {
        email: key.clone(),
        name: name.to_string(),
        password_hash: new_password_hash(password),
    };
    users.insert(
        key.clone(),
        serde_json::to_value(&record).unwrap_or_default(),
    );
    store.set(keys::USERS, users);

    let user = User {
        email: key,
        name: name.to_string(),
    };
    store.set(keys::CURRENT_USER, &user);
    Ok(user)
}

/// Verify credentials and sign the account in.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] for an unknown email or a wrong
/// password; the two cases are indistinguishable to the caller.
pub fn sign_in(store: &mut StateStore, email: &str, password: &str) -> Result<User, AuthError> {
    let key = email.trim().to_lowercase();
    let users: Map<String, Value> = store.get(keys::USERS, Map::new());
    let record: UserRecord = users
        .get(&key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or(AuthError::InvalidCredentials)?;
    if !verify_password(&record.password_hash, password) {
        return Err(AuthError::InvalidCredentials);
    }
    let user = User {
        email: record.email,
        name: record.name,
    };
    store.set(keys::CURRENT_USER, &user);
    Ok(user)
}

/// Clear the signed-in user.
pub fn sign_out(store: &mut StateStore) {
    store.set(keys::CURRENT_USER, Value::Null);
}

/// The signed-in user, if any.
pub fn current_user(store: &StateStore) -> Option<User> {
    store.get(keys::CURRENT_USER, None)
}
