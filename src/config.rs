//! Runtime configuration.
//!
//! Parsed from the command line (with environment fallbacks) by clap.
//! The defaults reproduce the demo: a premium customer with inventory
//! available.
//!
//! ```text
//! spark-storefront [--standard] [--out-of-stock] [--dump]
//!                  [--log-file <PATH>] [--log-level <FILTER>]
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Storefront settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "spark-storefront")]
#[command(version, about = "Reactive terminal storefront demo")]
pub struct StoreConfig {
    /// Standard customer: pay for shipping instead of premium free shipping
    #[arg(long, env = "STOREFRONT_STANDARD")]
    pub standard: bool,

    /// Start with the inventory-availability flag cleared
    #[arg(long)]
    pub out_of_stock: bool,

    /// Print one frame as plain text and exit instead of running the TUI
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "STOREFRONT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "spark_storefront=trace". Falls back to RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl StoreConfig {
    /// Whether the customer gets free shipping.
    pub fn premium(&self) -> bool {
        !self.standard
    }

    /// Starting value of the inventory-availability flag.
    pub fn inventory(&self) -> bool {
        !self.out_of_stock
    }

    pub fn with_premium(mut self, premium: bool) -> Self {
        self.standard = !premium;
        self
    }

    pub fn with_inventory(mut self, inventory: bool) -> Self {
        self.out_of_stock = !inventory;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.premium());
        assert!(config.inventory());
        assert!(!config.dump);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let config = StoreConfig::try_parse_from([
            "spark-storefront",
            "--standard",
            "--out-of-stock",
            "--log-file",
            "/tmp/store.log",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(!config.premium());
        assert!(!config.inventory());
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/store.log")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_no_args_matches_default() {
        let config = StoreConfig::try_parse_from(["spark-storefront"]).unwrap();
        assert_eq!(config.premium(), StoreConfig::default().premium());
        assert_eq!(config.inventory(), StoreConfig::default().inventory());
    }

    #[test]
    fn test_builders() {
        let config = StoreConfig::default().with_premium(false).with_inventory(false);
        assert!(config.standard);
        assert!(config.out_of_stock);
    }
}
