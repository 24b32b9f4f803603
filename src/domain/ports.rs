use crate::domain::model::{ProbeCase, StorageValue};
use crate::utils::error::Result;

/// Populated by a storage driver from a result column.
pub trait Scanner {
    fn scan(&mut self, src: StorageValue) -> Result<()>;
}

/// Bound by a storage driver into an outgoing parameter.
pub trait Valuer {
    fn value(&self) -> Result<StorageValue>;
}

/// Conversion from a non-null driver value into a concrete element type.
///
/// Implementations only accept lossless conversions and report everything else
/// as [`NullableError::TypeMismatch`](crate::NullableError::TypeMismatch).
pub trait FromStorage: Sized {
    fn from_storage(src: StorageValue) -> Result<Self>;
}

/// Conversion from an element type into a driver-acceptable value. Infallible.
pub trait ToStorage {
    fn to_storage(&self) -> StorageValue;
}

/// Anything that can hand the probe tool its cases and logging preferences.
pub trait ConfigProvider {
    fn cases(&self) -> Result<Vec<ProbeCase>>;
    fn verbose(&self) -> bool;
    fn log_json(&self) -> bool;
}
