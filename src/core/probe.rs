use crate::domain::model::{ProbeCase, ProbeInput, ProbeReport, StorageValue, ValueKind};
use crate::domain::nullable::Nullable;
use crate::domain::ports::{FromStorage, ToStorage};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

pub fn probe<T>(input: &ProbeInput) -> Result<(bool, String, StorageValue, String)>
where
    T: FromStorage + ToStorage + Serialize + DeserializeOwned + Default + Debug,
{
    let mut nullable = Nullable::<T>::null();
    match input {
        ProbeInput::Json(text) => nullable.decode_json(text)?,
        ProbeInput::Storage(value) => nullable.scan(value.clone())?,
    }

    let json = nullable.to_json()?;
    let storage = nullable.value()?;
    let valid = nullable.is_valid();
    let option = format!("{:?}", nullable.into_option());
    Ok((valid, json, storage, option))
}

#[derive(Debug, Default)]
pub struct ProbeEngine;

impl ProbeEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, case: &ProbeCase) -> Result<ProbeReport> {
        tracing::debug!("Probing {:?} with {:?}", case.kind, case.input);

        let (valid, json, storage, option) = match case.kind {
            ValueKind::Int8 => probe::<i8>(&case.input)?,
            ValueKind::Int16 => probe::<i16>(&case.input)?,
            ValueKind::Int32 => probe::<i32>(&case.input)?,
            ValueKind::Int64 => probe::<i64>(&case.input)?,
            ValueKind::Uint8 => probe::<u8>(&case.input)?,
            ValueKind::Uint16 => probe::<u16>(&case.input)?,
            ValueKind::Uint32 => probe::<u32>(&case.input)?,
            ValueKind::Float32 => probe::<f32>(&case.input)?,
            ValueKind::Float64 => probe::<f64>(&case.input)?,
            ValueKind::Bool => probe::<bool>(&case.input)?,
            ValueKind::Text => probe::<String>(&case.input)?,
            ValueKind::Bytes => probe::<Vec<u8>>(&case.input)?,
            ValueKind::Timestamp => probe::<DateTime<Utc>>(&case.input)?,
        };

        Ok(ProbeReport {
            name: case.name.clone(),
            kind: case.kind,
            valid,
            json,
            storage,
            option,
        })
    }

    /// 逐一執行，單一案例失敗不影響其他案例
    pub fn run_all<'a>(
        &self,
        cases: &'a [ProbeCase],
    ) -> Vec<(&'a ProbeCase, Result<ProbeReport>)> {
        cases.iter().map(|case| (case, self.run(case))).collect()
    }
}
