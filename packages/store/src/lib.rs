pub mod kv;
pub mod shown;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
pub use shown::{ShownAlerts, SHOWN_ALERTS_CAP, SHOWN_ALERTS_KEY};
