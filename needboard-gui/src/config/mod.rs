use std::{fs, path::Path};

use needboard_lib::fs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// The gui configuration, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub donation: Donation,
}

/// What the donation overlay tells visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub title: String,
    pub message: String,
    pub contact: String,
}

impl Default for Donation {
    fn default() -> Self {
        Self {
            title: "Como Doar".into(),
            message: "Entre em contato conosco para combinar a entrega da sua doação. \
                      Toda ajuda faz diferença na vida dos nossos residentes."
                .into(),
            contact: "Casa Geriátrica São Mateus".into(),
        }
    }
}

impl GuiConfig {
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("No configuration directory available ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                    warn!("Ignoring unreadable {}: {e}", path.display());
                    Self::default()
                }),
                Err(e) => {
                    warn!("Failed to read {}: {e}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            cfg.save_to(path);
            cfg
        }
    }

    pub fn save_to(&self, path: &Path) {
        let written = toml::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|contents| fs::write(path, contents).map_err(|e| e.to_string()));

        if let Err(e) = written {
            warn!("Failed to save {}: {e}", path.display());
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}
