//! Persistenz benannter Räder als JSON-Dokumente.
//!
//! Jedes gespeicherte Rad ist eine Datei `<name>.json` im Store-Verzeichnis.
//! Der Rad-Kern behandelt Snapshots als opake Payloads; hier wird nur
//! gelistet, geladen, gespeichert und gelöscht.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Ein benanntes Rad mit Zeitstempeln (Unix-Sekunden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    pub name: String,
    pub options: Vec<String>,
    pub created_at: u64,
    pub modified_at: u64,
}

/// Dokument-Store über einem Verzeichnis.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Erstellt einen Store über dem angegebenen Verzeichnis.
    /// Das Verzeichnis wird erst beim ersten Speichern angelegt.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Standard-Verzeichnis `wheels/` neben der Binary.
    pub fn default_dir() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("gluecksrad"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("wheels")
    }

    /// Listet die Namen aller gespeicherten Räder, alphabetisch sortiert.
    /// Ein fehlendes Store-Verzeichnis ergibt eine leere Liste.
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Store-Verzeichnis nicht lesbar: {}", self.dir.display())
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Lädt ein gespeichertes Rad.
    pub fn load(&self, name: &str) -> anyhow::Result<WheelSnapshot> {
        let path = self.path_for(name)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Rad '{}' nicht lesbar: {}", name, path.display()))?;
        let snapshot: WheelSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Rad '{}' hat ungültiges JSON", name))?;
        Ok(snapshot)
    }

    /// Speichert die Optionsliste unter dem angegebenen Namen.
    ///
    /// Beim Überschreiben bleibt `created_at` des bestehenden Dokuments
    /// erhalten; `modified_at` wird aktualisiert.
    pub fn save(&self, name: &str, options: &[String]) -> anyhow::Result<WheelSnapshot> {
        let path = self.path_for(name)?;
        let now = unix_now();
        let created_at = self
            .load(name)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let snapshot = WheelSnapshot {
            name: name.to_string(),
            options: options.to_vec(),
            created_at,
            modified_at: now,
        };

        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!(
                "Store-Verzeichnis nicht anlegbar: {}",
                self.dir.display()
            )
        })?;
        let content = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Rad '{}' nicht speicherbar: {}", name, path.display()))?;

        log::info!("Rad '{}' gespeichert nach: {}", name, path.display());
        Ok(snapshot)
    }

    /// Löscht ein gespeichertes Rad.
    pub fn delete(&self, name: &str) -> anyhow::Result<()> {
        let path = self.path_for(name)?;
        std::fs::remove_file(&path)
            .with_context(|| format!("Rad '{}' nicht löschbar: {}", name, path.display()))?;
        log::info!("Rad '{}' gelöscht", name);
        Ok(())
    }

    /// Validiert den Namen und bildet ihn auf den Dokument-Pfad ab.
    fn path_for(&self, name: &str) -> anyhow::Result<PathBuf> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            bail!("Rad-Name darf nicht leer sein");
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            bail!("Ungültiger Rad-Name: {:?}", name);
        }
        Ok(self.dir.join(format!("{trimmed}.json")))
    }
}

/// Aktuelle Unix-Zeit in Sekunden.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
