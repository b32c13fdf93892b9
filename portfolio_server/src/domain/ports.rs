use crate::domain::entities::Identity;
use crate::domain::errors::StorageError;

// Port for the local key-value storage used by the session and theme stores.
// Writes must be durable before the call returns.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

// Port for checking a username/password pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<Identity>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> u64;
}

// Port for drawing target positions, as a percentage of the play area.
pub trait PositionSource: Send {
    fn next_percent(&mut self, min: f32, max: f32) -> f32;
}
