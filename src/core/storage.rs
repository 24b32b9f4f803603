use crate::domain::model::StorageValue;
use crate::domain::ports::{FromStorage, ToStorage};
use crate::utils::error::{NullableError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

fn unsupported<T>(src: &StorageValue) -> NullableError {
    NullableError::mismatch::<T>(src.kind(), "unsupported conversion")
}

fn utf8<'a, T>(kind: &'static str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| NullableError::mismatch::<T>(kind, format!("invalid UTF-8: {}", e)))
}

fn parse_int<T>(kind: &'static str, text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| NullableError::mismatch::<T>(kind, format!("{:?} is not an integer: {}", text, e)))
}

fn parse_float<T>(kind: &'static str, text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| NullableError::mismatch::<T>(kind, format!("{:?} is not a number: {}", text, e)))
}

// -2^63 <= v < 2^63
fn integral_float(v: f64) -> Option<i64> {
    if v.fract() == 0.0 && v >= -9.223_372_036_854_775_808e18 && v < 9.223_372_036_854_775_808e18 {
        Some(v as i64)
    } else {
        None
    }
}

fn exact_int_to_f64<T>(kind: &'static str, v: i64) -> Result<f64> {
    let f = v as f64;
    if f as i128 == v as i128 {
        Ok(f)
    } else {
        Err(NullableError::mismatch::<T>(kind, format!("{} is not exactly representable", v)))
    }
}

fn narrow_f32(kind: &'static str, v: f64) -> Result<f32> {
    let n = v as f32;
    if v.is_nan() || f64::from(n) == v {
        Ok(n)
    } else {
        Err(NullableError::mismatch::<f32>(kind, format!("{} is not exactly representable", v)))
    }
}

fn parse_f32(kind: &'static str, text: &str) -> Result<f32> {
    let wide = parse_float::<f32>(kind, text)?;
    let n = text
        .parse::<f32>()
        .map_err(|e| NullableError::mismatch::<f32>(kind, format!("{:?} is not a number: {}", text, e)))?;
    if n.is_infinite() && wide.is_finite() {
        return Err(NullableError::mismatch::<f32>(kind, format!("{} is out of range", text)));
    }
    Ok(n)
}

fn parse_bool<T>(kind: &'static str, text: &str) -> Result<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(NullableError::mismatch::<T>(kind, format!("{:?} is not a boolean", text))),
    }
}

macro_rules! impl_integer_storage {
    ($($ty:ty),*) => {
        $(
            impl FromStorage for $ty {
                fn from_storage(src: StorageValue) -> Result<Self> {
                    let kind = src.kind();
                    let wide = match &src {
                        StorageValue::Int(v) => *v,
                        StorageValue::Float(v) => integral_float(*v).ok_or_else(|| {
                            NullableError::mismatch::<$ty>(kind, format!("{} is not an integral value", v))
                        })?,
                        StorageValue::Text(s) => parse_int::<$ty>(kind, s)?,
                        StorageValue::Bytes(b) => parse_int::<$ty>(kind, utf8::<$ty>(kind, b)?)?,
                        other => return Err(unsupported::<$ty>(other)),
                    };
                    <$ty>::try_from(wide).map_err(|_| {
                        NullableError::mismatch::<$ty>(kind, format!("value {} out of range", wide))
                    })
                }
            }

            impl ToStorage for $ty {
                fn to_storage(&self) -> StorageValue {
                    StorageValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_integer_storage!(i8, i16, i32, i64, u8, u16, u32);

impl FromStorage for f64 {
    fn from_storage(src: StorageValue) -> Result<Self> {
        let kind = src.kind();
        match &src {
            StorageValue::Float(v) => Ok(*v),
            StorageValue::Int(v) => exact_int_to_f64::<f64>(kind, *v),
            StorageValue::Text(s) => parse_float::<f64>(kind, s),
            StorageValue::Bytes(b) => parse_float::<f64>(kind, utf8::<f64>(kind, b)?),
            other => Err(unsupported::<f64>(other)),
        }
    }
}

impl ToStorage for f64 {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Float(*self)
    }
}

impl FromStorage for f32 {
    fn from_storage(src: StorageValue) -> Result<Self> {
        let kind = src.kind();
        match &src {
            StorageValue::Float(v) => narrow_f32(kind, *v),
            StorageValue::Int(v) => {
                let n = *v as f32;
                if n as i128 == *v as i128 {
                    Ok(n)
                } else {
                    Err(NullableError::mismatch::<f32>(
                        kind,
                        format!("{} is not exactly representable", v),
                    ))
                }
            }
            StorageValue::Text(s) => parse_f32(kind, s),
            StorageValue::Bytes(b) => parse_f32(kind, utf8::<f32>(kind, b)?),
            other => Err(unsupported::<f32>(other)),
        }
    }
}

impl ToStorage for f32 {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Float(f64::from(*self))
    }
}

impl FromStorage for bool {
    fn from_storage(src: StorageValue) -> Result<Self> {
        let kind = src.kind();
        match &src {
            StorageValue::Bool(v) => Ok(*v),
            StorageValue::Int(0) => Ok(false),
            StorageValue::Int(1) => Ok(true),
            StorageValue::Int(v) => Err(NullableError::mismatch::<bool>(
                kind,
                format!("{} is not 0 or 1", v),
            )),
            StorageValue::Text(s) => parse_bool::<bool>(kind, s),
            StorageValue::Bytes(b) => parse_bool::<bool>(kind, utf8::<bool>(kind, b)?),
            other => Err(unsupported::<bool>(other)),
        }
    }
}

impl ToStorage for bool {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Bool(*self)
    }
}

impl FromStorage for String {
    fn from_storage(src: StorageValue) -> Result<Self> {
        match src {
            StorageValue::Text(s) => Ok(s),
            StorageValue::Bytes(b) => String::from_utf8(b).map_err(|e| {
                NullableError::mismatch::<String>("bytes", format!("invalid UTF-8: {}", e))
            }),
            StorageValue::Int(v) => Ok(v.to_string()),
            StorageValue::Float(v) => Ok(v.to_string()),
            StorageValue::Bool(v) => Ok(v.to_string()),
            StorageValue::Timestamp(t) => Ok(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            other => Err(unsupported::<String>(&other)),
        }
    }
}

impl ToStorage for String {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Text(self.clone())
    }
}

impl FromStorage for Vec<u8> {
    fn from_storage(src: StorageValue) -> Result<Self> {
        match src {
            StorageValue::Bytes(b) => Ok(b),
            StorageValue::Text(s) => Ok(s.into_bytes()),
            other => Err(unsupported::<Vec<u8>>(&other)),
        }
    }
}

impl ToStorage for Vec<u8> {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Bytes(self.clone())
    }
}

impl FromStorage for DateTime<Utc> {
    fn from_storage(src: StorageValue) -> Result<Self> {
        match src {
            StorageValue::Timestamp(t) => Ok(t),
            other => Err(unsupported::<DateTime<Utc>>(&other)),
        }
    }
}

impl ToStorage for DateTime<Utc> {
    fn to_storage(&self) -> StorageValue {
        StorageValue::Timestamp(*self)
    }
}
