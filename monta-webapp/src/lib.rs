pub mod error;
#[cfg(feature = "hydrate")]
pub mod logging;
pub mod secrets;
pub mod storage;

pub use error::{Error, Result};
pub use secrets::{TokenStore, ACCESS_TOKEN};
#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;
pub use storage::{KeyValueStore, MemoryStorage};
