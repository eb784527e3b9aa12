use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::navigation::{parse_label_pairs, RouteLabels};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub edge: EdgeConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Project URL; functions live under `<base_url>/functions/v1/`.
    pub base_url: String,
    pub anon_key: String,
    /// Bearer token for signed-in calls. Falls back to the anon key.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub log_requests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Extra `segment -> label` entries layered over the builtin table.
    pub extra_labels: Vec<(String, String)>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Edge function overrides
        if let Some(v) = first_var(&["OPSDASH_EDGE_URL", "SUPABASE_URL"]) {
            self.edge.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = first_var(&["OPSDASH_ANON_KEY", "SUPABASE_ANON_KEY"]) {
            self.edge.anon_key = v;
        }
        if let Ok(v) = env::var("OPSDASH_ACCESS_TOKEN") {
            self.edge.access_token = Some(v).filter(|t| !t.is_empty());
        }
        if let Ok(v) = env::var("OPSDASH_TIMEOUT_SECS") {
            // A zero timeout would fail every request
            self.edge.timeout_secs = v
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .unwrap_or(self.edge.timeout_secs);
        }
        if let Ok(v) = env::var("OPSDASH_LOG_REQUESTS") {
            self.edge.log_requests = v.parse().unwrap_or(self.edge.log_requests);
        }

        // Navigation overrides
        if let Ok(v) = env::var("OPSDASH_NAV_LABELS") {
            self.navigation.extra_labels = parse_label_pairs(&v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            edge: EdgeConfig {
                base_url: "http://127.0.0.1:54321".to_string(),
                anon_key: String::new(),
                access_token: None,
                timeout_secs: 30,
                log_requests: true,
            },
            navigation: NavigationConfig { extra_labels: Vec::new() },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            edge: EdgeConfig {
                base_url: String::new(),
                anon_key: String::new(),
                access_token: None,
                timeout_secs: 15,
                log_requests: true,
            },
            navigation: NavigationConfig { extra_labels: Vec::new() },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            edge: EdgeConfig {
                base_url: String::new(),
                anon_key: String::new(),
                access_token: None,
                timeout_secs: 10,
                log_requests: false,
            },
            navigation: NavigationConfig { extra_labels: Vec::new() },
        }
    }

    /// Builtin label table plus configured extras.
    pub fn route_labels(&self) -> RouteLabels {
        RouteLabels::builtin().with_entries(self.navigation.extra_labels.iter().cloned())
    }
}

fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub static ROUTE_LABELS: Lazy<RouteLabels> = Lazy::new(|| CONFIG.route_labels());

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

pub fn route_labels() -> &'static RouteLabels {
    &ROUTE_LABELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.edge.base_url, "http://127.0.0.1:54321");
        assert!(config.edge.log_requests);
        assert!(config.edge.access_token.is_none());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.edge.timeout_secs, 10);
        assert!(!config.edge.log_requests);
    }

    #[test]
    fn test_route_labels_include_extras() {
        let mut config = AppConfig::development();
        config.navigation.extra_labels = vec![
            ("audit-log".to_string(), "Audit Log".to_string()),
            ("billing".to_string(), "Invoices".to_string()),
        ];
        let labels = config.route_labels();
        assert_eq!(labels.get("audit-log"), Some("Audit Log"));
        assert_eq!(labels.get("billing"), Some("Invoices"));
        assert_eq!(labels.get("dashboard"), Some("Dashboard"));
    }

    #[test]
    fn test_env_overrides() {
        // Single test touching the process environment so nothing races on it
        let vars = [
            "APP_ENV",
            "OPSDASH_EDGE_URL",
            "SUPABASE_URL",
            "OPSDASH_ANON_KEY",
            "SUPABASE_ANON_KEY",
            "OPSDASH_ACCESS_TOKEN",
            "OPSDASH_TIMEOUT_SECS",
            "OPSDASH_LOG_REQUESTS",
            "OPSDASH_NAV_LABELS",
        ];
        for var in vars {
            env::remove_var(var);
        }

        env::set_var("OPSDASH_EDGE_URL", "https://edge.example.com//");
        env::set_var("SUPABASE_URL", "https://ignored.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "anon-from-supabase");
        env::set_var("OPSDASH_ACCESS_TOKEN", "");
        env::set_var("OPSDASH_TIMEOUT_SECS", "soon");
        env::set_var("OPSDASH_NAV_LABELS", "audit-log=Audit Log, broken");

        let config = AppConfig::from_env();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.edge.base_url, "https://edge.example.com");
        assert_eq!(config.edge.anon_key, "anon-from-supabase");
        assert!(config.edge.access_token.is_none());
        assert_eq!(config.edge.timeout_secs, 30);
        assert_eq!(config.route_labels().get("audit-log"), Some("Audit Log"));

        env::remove_var("OPSDASH_EDGE_URL");
        env::set_var("APP_ENV", "production");
        env::set_var("OPSDASH_ACCESS_TOKEN", "user-jwt");
        env::set_var("OPSDASH_TIMEOUT_SECS", "0");

        let config = AppConfig::from_env();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.edge.base_url, "https://ignored.supabase.co");
        assert_eq!(config.edge.access_token.as_deref(), Some("user-jwt"));
        assert_eq!(config.edge.timeout_secs, 10);

        env::set_var("OPSDASH_TIMEOUT_SECS", "45");
        assert_eq!(AppConfig::from_env().edge.timeout_secs, 45);

        for var in vars {
            env::remove_var(var);
        }
    }
}
