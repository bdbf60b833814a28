//! Terraform Provider for Kubernetes manifests
//!
//! Serves the provider's schema catalog over the line-oriented JSON-RPC
//! plugin protocol on stdin/stdout.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use terraform_provider_kubernetes::config::Args;
use terraform_provider_kubernetes::provider::KubernetesProvider;
use terraform_provider_kubernetes::validate::validate_catalog;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    args.logging()
        .init()
        .context("failed to initialize logging")?;

    validate_catalog().context("provider schema catalog is invalid")?;

    let provider = KubernetesProvider::new();

    if args.print_schema {
        let schema = serde_json::to_string_pretty(&provider.schema_json())?;
        println!("{}", schema);
        return Ok(());
    }

    tracing::info!("Starting Terraform Provider for Kubernetes");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    for line in stdin.lock().lines() {
        match line {
            Ok(input) => {
                if input.trim().is_empty() {
                    continue;
                }
                let response = provider.handle_request(&input);
                if let Err(e) = writeln!(stdout_lock, "{}", response) {
                    tracing::error!("Failed to write response: {}", e);
                    break;
                }
                if let Err(e) = stdout_lock.flush() {
                    tracing::error!("Failed to flush stdout: {}", e);
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    tracing::info!("Terraform Provider shutting down");
    Ok(())
}
