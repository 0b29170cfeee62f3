//! Handles settings for the daemon.
//!
//! Values are read, in increasing priority, from built-in defaults, the
//! optional `settings` file (TOML) and `LEDGERD__*` environment variables,
//! e.g. `LEDGERD__SERVER__PORT=8080`.
use std::str::FromStr;

use chrono_tz::Tz;
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::{AmountPolicy, Ledger};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Parser)]
#[command(name = "ledgerd", about = "In-memory customer ledger over HTTP")]
struct Args {
    /// Optional config file path (TOML), without or with extension.
    #[arg(long, env = "LEDGERD_CONFIG")]
    config: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct LedgerSettings {
    pub amount_policy: String,
    pub timezone: String,
}

impl LedgerSettings {
    /// Build an empty ledger configured from these settings.
    pub fn build(&self) -> Result<Ledger, ConfigError> {
        let policy = AmountPolicy::try_from(self.amount_policy.as_str())
            .map_err(|err| ConfigError::Message(err.to_string()))?;
        let timezone = Tz::from_str(self.timezone.trim()).map_err(|err| {
            ConfigError::Message(format!("invalid timezone {:?}: {err}", self.timezone))
        })?;

        Ok(Ledger::builder()
            .amount_policy(policy)
            .timezone(timezone)
            .build())
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: LedgerSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        Self::load(Some(path), Environment::with_prefix("LEDGERD").separator("__"))
    }

    fn load(path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3333)?
            .set_default("ledger.amount_policy", AmountPolicy::default().as_str())?
            .set_default("ledger.timezone", "UTC")?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder.add_source(env).build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("LEDGERD")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn defaults() {
        let settings = Settings::load(None, env(&[])).unwrap();

        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.port, 3333);

        let ledger = settings.ledger.build().unwrap();
        assert_eq!(ledger.amount_policy(), AmountPolicy::Positive);
        assert_eq!(ledger.timezone(), Tz::UTC);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::load(
            None,
            env(&[
                ("LEDGERD__SERVER__PORT", "8080"),
                ("LEDGERD__LEDGER__AMOUNT_POLICY", "unchecked"),
                ("LEDGERD__LEDGER__TIMEZONE", "America/Sao_Paulo"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        let ledger = settings.ledger.build().unwrap();
        assert_eq!(ledger.amount_policy(), AmountPolicy::Unchecked);
        assert_eq!(ledger.timezone(), chrono_tz::America::Sao_Paulo);
    }

    #[test]
    fn invalid_ledger_settings_are_reported() {
        let bad_policy = LedgerSettings {
            amount_policy: "lenient".to_string(),
            timezone: "UTC".to_string(),
        };
        let err = bad_policy.build().unwrap_err().to_string();
        assert!(err.contains("unknown amount policy \"lenient\""), "{err}");
        assert!(!err.contains("Invalid amount"), "{err}");

        let bad_timezone = LedgerSettings {
            amount_policy: "positive".to_string(),
            timezone: "Mars/Olympus".to_string(),
        };
        assert!(bad_timezone.build().is_err());
    }
}
