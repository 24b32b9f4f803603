#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::ValueKind;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "maybe-probe")]
#[command(about = "Run values through the nullable container's storage, JSON and option boundaries")]
pub struct CliConfig {
    #[arg(long, value_enum, help = "Element type of the container")]
    pub kind: Option<ValueKind>,

    #[arg(long, help = "JSON text to decode, e.g. 42 or null")]
    pub json: Option<String>,

    #[arg(long, help = r#"Driver value to scan, e.g. {"type":"int","value":42}"#)]
    pub storage: Option<String>,

    #[arg(long, help = "Scan SQL NULL")]
    pub sql_null: bool,

    #[arg(long, help = "Load probe cases from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
