//! Command-line and environment options

use crate::logging::LoggingConfig;
use clap::builder::FalseyValueParser;
use clap::Parser;

/// Terraform provider for Kubernetes manifests
#[derive(Parser, Debug, Clone)]
#[command(name = "terraform-provider-kubernetes")]
#[command(about = "Terraform provider for Kubernetes manifests", version)]
pub struct Args {
    /// Log level used when RUST_LOG is not set, or JSON for trace-level JSON logs
    #[arg(long, env = "TF_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "TF_LOG_JSON", value_parser = FalseyValueParser::new())]
    pub log_json: bool,

    /// Print the provider schema as JSON and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Args {
    pub fn logging(&self) -> LoggingConfig {
        // TF_LOG=JSON means trace level, JSON formatted
        if self.log_level.eq_ignore_ascii_case("json") {
            return LoggingConfig {
                level: "trace".to_string(),
                json_format: true,
            };
        }

        LoggingConfig {
            // Terraform spells levels in upper case
            level: self.log_level.to_lowercase(),
            json_format: self.log_json,
        }
    }
}
