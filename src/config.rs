//! Configuration lue depuis l'environnement (et un éventuel fichier `.env`).

use anyhow::{Context, Result};
use url::Url;

use crate::client::Mode;
use crate::consts::{DEFAULT_ORIGIN, HTTP_PORT};

pub const PORT_VAR: &str = "SHELFMARK_HTTP_PORT";
pub const MODE_VAR: &str = "SHELFMARK_MODE";
pub const ORIGIN_VAR: &str = "SHELFMARK_ORIGIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_port: u16,
    pub mode: Mode,
    /// Origine publique de l'application, utilisée en production
    pub origin: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construit la configuration à partir d'une source de variables quelconque
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, raw))?,
            None => HTTP_PORT,
        };

        let mode = match lookup(MODE_VAR) {
            Some(raw) => raw.parse::<Mode>().with_context(|| format!("Invalid {}", MODE_VAR))?,
            None => Mode::from_build(),
        };

        let origin = lookup(ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = Url::parse(&origin).with_context(|| format!("Invalid {}: {:?}", ORIGIN_VAR, origin))?;

        Ok(Self {
            http_port,
            mode,
            origin,
        })
    }
}
