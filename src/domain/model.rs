use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value as the storage driver hands it over, or expects to receive it.
///
/// This is the closed set of driver-native representations. `Null` is SQL NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StorageValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl StorageValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Bool(_) => "bool",
            StorageValue::Bytes(_) => "bytes",
            StorageValue::Text(_) => "text",
            StorageValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StorageValue {
                fn from(value: $ty) -> Self {
                    StorageValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for StorageValue {
    fn from(value: f32) -> Self {
        StorageValue::Float(f64::from(value))
    }
}

impl From<f64> for StorageValue {
    fn from(value: f64) -> Self {
        StorageValue::Float(value)
    }
}

impl From<bool> for StorageValue {
    fn from(value: bool) -> Self {
        StorageValue::Bool(value)
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(value: Vec<u8>) -> Self {
        StorageValue::Bytes(value)
    }
}

impl From<&[u8]> for StorageValue {
    fn from(value: &[u8]) -> Self {
        StorageValue::Bytes(value.to_vec())
    }
}

impl From<String> for StorageValue {
    fn from(value: String) -> Self {
        StorageValue::Text(value)
    }
}

impl From<&str> for StorageValue {
    fn from(value: &str) -> Self {
        StorageValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for StorageValue {
    fn from(value: DateTime<Utc>) -> Self {
        StorageValue::Timestamp(value)
    }
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StorageValue::Null, Into::into)
    }
}

/// Element types a probe can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Float32,
    Float64,
    Bool,
    Text,
    Bytes,
    Timestamp,
}

/// Where the probed value comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeInput {
    Json(String),
    Storage(StorageValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeCase {
    #[serde(default)]
    pub name: Option<String>,
    pub kind: ValueKind,
    pub input: ProbeInput,
}

/// How one value looks on every boundary after it has been read in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub name: Option<String>,
    pub kind: ValueKind,
    pub valid: bool,
    pub json: String,
    pub storage: StorageValue,
    pub option: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_becomes_null() {
        assert!(StorageValue::from(None::<i64>).is_null());
        assert!(!StorageValue::from(Some(0i64)).is_null());
        assert_eq!(StorageValue::from(Some("x")).kind(), "text");
    }
}
