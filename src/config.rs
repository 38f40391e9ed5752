use std::path::{Path, PathBuf};
use anyhow::Result;
use serde::Deserialize;
use tracing::debug;
use crate::args::Args;

#[derive(Default, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub listener: ListenerConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Command line values win over the file.
    pub fn apply_args(mut self, args: &Args) -> Self {
        self.listener.host = args.host.clone().or(self.listener.host);
        self.listener.port = args.port.or(self.listener.port);
        self.server.resolver = args.resolver.clone().or(self.server.resolver);
        self.log.level = args.log_level.clone().or(self.log.level);

        self
    }
}

#[derive(Default, Deserialize, Debug)]
pub struct ListenerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Default, Deserialize, Debug)]
pub struct ServerConfig {
    pub resolver: Option<String>,
    pub answer: Option<String>,
    pub ttl: Option<u32>,
    pub max_pointer_jumps: Option<usize>,
}

#[derive(Default, Deserialize, Debug)]
pub struct LogConfig {
    pub level: Option<String>,
}

pub fn get_home_dir() -> Option<PathBuf> {
    home::home_dir().map(|path| path.join(".dnsrelay"))
}

/// Loads `path` when given. Otherwise `~/.dnsrelay/conf.toml` is used if it
/// exists, and an empty config if it doesn't.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    if let Some(path) = path {
        return load(Path::new(path));
    }

    match get_home_dir().map(|dir| dir.join("conf.toml")) {
        Some(path) if path.exists() => load(&path),
        _ => {
            debug!("no config file found, using defaults");

            Ok(Config::default())
        }
    }
}

fn load(p: &Path) -> Result<Config> {
    let file = std::fs::read_to_string(p)?;

    let cfg: Config = toml::from_str(&file)?;
    debug!("loaded config from {}", p.display());

    Ok(cfg)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_toml() {
        let cfg: Config = toml::from_str(
            r#"
            [listener]
            host = "0.0.0.0"
            port = 53

            [server]
            resolver = "1.1.1.1:53"
            ttl = 300
            "#,
        )
        .unwrap();

        assert_eq!(cfg.listener.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cfg.listener.port, Some(53));
        assert_eq!(cfg.server.resolver.as_deref(), Some("1.1.1.1:53"));
        assert_eq!(cfg.server.ttl, Some(300));
        assert_eq!(cfg.server.answer, None);
        assert_eq!(cfg.log.level, None);
    }

    #[test]
    fn empty_file_is_default() {
        let cfg: Config = toml::from_str("").unwrap();

        assert!(cfg.listener.port.is_none());
        assert!(cfg.server.resolver.is_none());
    }

    #[test]
    fn args_override_file() {
        let cfg: Config = toml::from_str(
            "[listener]\nport = 53\nhost = \"0.0.0.0\"\n[server]\nresolver = \"1.1.1.1:53\"",
        )
        .unwrap();
        let args = Args {
            port: Some(2053),
            resolver: Some("9.9.9.9:53".to_string()),
            ..Default::default()
        };

        let cfg = cfg.apply_args(&args);

        assert_eq!(cfg.listener.port, Some(2053));
        assert_eq!(cfg.listener.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cfg.server.resolver.as_deref(), Some("9.9.9.9:53"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load_config(Some("/nonexistent/dnsrelay.toml")).is_err());
    }
}
