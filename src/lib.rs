pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::probe::ProbeEngine;
pub use crate::domain::model::{ProbeCase, ProbeInput, ProbeReport, StorageValue, ValueKind};
pub use crate::domain::nullable::Nullable;
pub use crate::domain::ports::{ConfigProvider, FromStorage, Scanner, ToStorage, Valuer};
pub use crate::utils::error::{NullableError, Result};
