use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, path::PathBuf};

use clap::Parser;

/// Static host for the workout tracker frontend.
#[derive(Debug, Clone, Parser)]
#[command(name = "server", version, about)]
pub struct ServerConfig {
    /// Address to bind both listeners to.
    #[arg(long, env = "WORKOUT_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub address: IpAddr,

    #[arg(long, env = "WORKOUT_HTTP_PORT", default_value_t = 8080)]
    pub http_port: u16,

    /// Only used when a certificate is configured.
    #[arg(long, env = "WORKOUT_HTTPS_PORT", default_value_t = 8443)]
    pub https_port: u16,

    /// Output directory of the frontend build.
    #[arg(long, env = "WORKOUT_DIST_DIR", default_value = "frontend/dist")]
    pub dist_dir: PathBuf,

    #[arg(long, env = "WORKOUT_LOG_DIR", default_value = "server/log")]
    pub log_dir: PathBuf,

    /// PEM certificate chain. Enables HTTPS together with `--tls-key`.
    #[arg(long, env = "WORKOUT_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "WORKOUT_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

impl ServerConfig {
    pub fn tls(&self) -> Option<(&PathBuf, &PathBuf)> {
        self.tls_cert.as_ref().zip(self.tls_key.as_ref())
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::from((self.address, self.http_port))
    }

    pub fn https_addr(&self) -> SocketAddr {
        SocketAddr::from((self.address, self.https_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["server"]).unwrap();
        assert_eq!(config.http_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert!(config.tls().is_none());
    }

    #[test]
    fn tls_needs_both_files() {
        assert!(ServerConfig::try_parse_from(["server", "--tls-cert", "cert.pem"]).is_err());

        let config = ServerConfig::try_parse_from([
            "server", "--tls-cert", "cert.pem", "--tls-key", "key.pem", "--https-port", "443",
        ]).unwrap();
        assert_eq!(config.tls(), Some((&PathBuf::from("cert.pem"), &PathBuf::from("key.pem"))));
        assert_eq!(config.https_addr().port(), 443);
    }
}
