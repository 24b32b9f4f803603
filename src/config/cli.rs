use crate::config::CliConfig;
use crate::domain::model::{ProbeCase, ProbeInput, StorageValue};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NullableError, Result};
use crate::utils::validation::{validate_required_field, Validate};

impl CliConfig {
    fn input(&self) -> Result<ProbeInput> {
        match (&self.json, &self.storage, self.sql_null) {
            (Some(text), None, false) => Ok(ProbeInput::Json(text.clone())),
            (None, Some(raw), false) => serde_json::from_str(raw)
                .map(ProbeInput::Storage)
                .map_err(|e| NullableError::InvalidConfigValueError {
                    field: "storage".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }),
            (None, None, true) => Ok(ProbeInput::Storage(StorageValue::Null)),
            _ => Err(NullableError::ConfigError {
                message: "exactly one of --json, --storage or --sql-null is required".to_string(),
            }),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn cases(&self) -> Result<Vec<ProbeCase>> {
        let kind = *validate_required_field("kind", &self.kind)?;
        Ok(vec![ProbeCase {
            name: None,
            kind,
            input: self.input()?,
        }])
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_json(&self) -> bool {
        self.log_json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 使用 TOML 檔案時由檔案內容負責驗證
        if self.config.is_some() {
            return Ok(());
        }
        validate_required_field("kind", &self.kind)?;
        self.input().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ValueKind;
    use clap::Parser;

    #[test]
    fn test_json_case_from_args() {
        let config = CliConfig::parse_from(["maybe-probe", "--kind", "int32", "--json", "42"]);
        assert!(config.validate().is_ok());

        let cases = config.cases().unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].kind, ValueKind::Int32);
        assert_eq!(cases[0].input, ProbeInput::Json("42".to_string()));
    }

    #[test]
    fn test_storage_case_from_args() {
        let config = CliConfig::parse_from([
            "maybe-probe",
            "--kind",
            "text",
            "--storage",
            r#"{"type":"bytes","value":[104,105]}"#,
        ]);
        let cases = config.cases().unwrap();
        assert_eq!(cases[0].input, ProbeInput::Storage(StorageValue::Bytes(b"hi".to_vec())));
    }

    #[test]
    fn test_sql_null_case_from_args() {
        let config = CliConfig::parse_from(["maybe-probe", "--kind", "timestamp", "--sql-null"]);
        let cases = config.cases().unwrap();
        assert_eq!(cases[0].input, ProbeInput::Storage(StorageValue::Null));
    }

    #[test]
    fn test_conflicting_inputs_fail_validation() {
        let config =
            CliConfig::parse_from(["maybe-probe", "--kind", "bool", "--json", "true", "--sql-null"]);
        assert!(config.validate().is_err());

        let missing_kind = CliConfig::parse_from(["maybe-probe", "--json", "1"]);
        assert!(missing_kind.validate().is_err());
    }

    #[test]
    fn test_config_file_skips_arg_validation() {
        let config = CliConfig::parse_from(["maybe-probe", "--config", "cases.toml"]);
        assert!(config.validate().is_ok());
    }
}
