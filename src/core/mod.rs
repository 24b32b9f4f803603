pub mod json;
pub mod probe;
pub mod storage;

pub use crate::domain::model::{ProbeCase, ProbeInput, ProbeReport, StorageValue, ValueKind};
pub use crate::domain::nullable::Nullable;
pub use crate::domain::ports::{ConfigProvider, FromStorage, Scanner, ToStorage, Valuer};
pub use crate::utils::error::Result;
