//! Zentrale Konfiguration für das Glücksrad.
//!
//! `WheelOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Animation ───────────────────────────────────────────────────────

/// Feste Dauer einer Spin-Animation in Sekunden.
pub const SPIN_DURATION_SECS: f32 = 4.0;

// ── Viewport ────────────────────────────────────────────────────────

/// Rand zwischen Rad und Viewport-Kante in Pixeln.
pub const WHEEL_MARGIN_PX: f32 = 10.0;
/// Minimale Label-Schriftgröße in Punkten.
pub const LABEL_FONT_MIN_PT: f32 = 12.0;
/// Maximale Label-Schriftgröße in Punkten.
pub const LABEL_FONT_MAX_PT: f32 = 16.0;
/// Schriftgröße skaliert mit `radius / LABEL_FONT_RADIUS_DIVISOR`,
/// geklemmt zwischen Minimum und Maximum.
pub const LABEL_FONT_RADIUS_DIVISOR: f32 = 10.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Rad-Optionen.
/// Wird als `gluecksrad.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelOptions {
    /// Dauer einer Spin-Animation in Sekunden
    pub spin_duration_secs: f32,
    /// Rand zwischen Rad und Viewport-Kante in Pixeln
    pub wheel_margin_px: f32,
    /// Minimale Label-Schriftgröße in Punkten
    pub label_font_min_pt: f32,
    /// Maximale Label-Schriftgröße in Punkten
    pub label_font_max_pt: f32,
    /// Tooltip über dem Segment unter dem Mauszeiger anzeigen
    #[serde(default = "default_show_tooltip")]
    pub show_tooltip: bool,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            spin_duration_secs: SPIN_DURATION_SECS,
            wheel_margin_px: WHEEL_MARGIN_PX,
            label_font_min_pt: LABEL_FONT_MIN_PT,
            label_font_max_pt: LABEL_FONT_MAX_PT,
            show_tooltip: true,
        }
    }
}

/// Serde-Default für `show_tooltip` (Abwärtskompatibilität bestehender
/// TOML-Dateien).
fn default_show_tooltip() -> bool {
    true
}

impl WheelOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("gluecksrad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gluecksrad.toml")
    }

    /// Berechnet die Label-Schriftgröße für einen Rad-Radius.
    ///
    /// `radius / LABEL_FONT_RADIUS_DIVISOR`, geklemmt auf `[min, max]`.
    pub fn label_font_size(&self, radius: f32) -> f32 {
        (radius / LABEL_FONT_RADIUS_DIVISOR).clamp(self.label_font_min_pt, self.label_font_max_pt)
    }
}
