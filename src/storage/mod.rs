pub mod file_backend;
pub mod memory;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Key holding the serialized transaction snapshot.
pub const TRANSACTIONS_KEY: &str = "ft_transactions_v1";
/// Key holding the serialized preference document.
pub const PREFERENCES_KEY: &str = "ft_preferences_v1";

/// Abstraction over persistence backends that keep string payloads under
/// fixed keys. Backends may fail; callers at the engine boundary degrade
/// read failures to defaults and log write failures instead of propagating.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub use file_backend::FileStore;
pub use memory::MemoryStore;
