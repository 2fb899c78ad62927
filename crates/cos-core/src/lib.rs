pub mod adapter;
pub mod config;
pub mod error;
pub mod status;

pub use adapter::{AdapterKind, AdapterTarget};
pub use config::{is_frame_safe, CosConfig, LayoutConfig};
pub use error::{CosError, Result};
pub use status::{AdapterStatus, EnvStatus, Environment, KernelStatus, MemoryStatus, StatusRecord};
