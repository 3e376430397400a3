// CLI module for lingolens

use crate::config::AppConfig;
use clap::Parser;

/// lingolens - Translation and OCR proxy for Google Cloud APIs
#[derive(Parser, Debug, Default)]
#[command(name = "lingolens", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.lingolens/config.toml)
    #[arg(long, env = "LINGOLENS_CONFIG")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory holding index.html and other static assets
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Override loaded configuration with flags given on the command line.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["lingolens", "--port", "8081", "--static-dir", "public"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.static_dir, "public");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = AppConfig::default();
        config.server.port = 7000;
        Args::default().apply(&mut config);
        assert_eq!(config.server.port, 7000);
    }
}
