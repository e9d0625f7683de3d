/// Saved palettes and the pins pointing at them.
use anyhow::Result;
use chrono::{DateTime, Local};
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::store;
use crate::types::{DEFAULT_PALETTE_NAME, PaletteId, SavedPalette};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Library {
    pub palettes: Vec<SavedPalette>,
    pub pins: Vec<PaletteId>,
}

fn load_blob<T: DeserializeOwned + Default>(key: &str, conn: &Connection) -> Result<T> {
    let Some(raw) = store::get(key, conn)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!("Ignoring unreadable '{key}' entry: {e}");
            Ok(T::default())
        }
    }
}

impl Library {
    /// Reads both blobs. Pins without a matching palette are dropped.
    pub fn load(conn: &Connection) -> Result<Self> {
        let palettes: Vec<SavedPalette> = load_blob(store::PALETTES_KEY, conn)?;
        let stored: Vec<PaletteId> = load_blob(store::PINS_KEY, conn)?;
        let before = stored.len();
        let mut pins: Vec<PaletteId> = Vec::with_capacity(before);
        for id in stored {
            if !pins.contains(&id) && palettes.iter().any(|palette| palette.id == id) {
                pins.push(id);
            }
        }
        if pins.len() != before {
            log::info!("Dropped {} stale pin(s)", before - pins.len());
        }
        log::debug!("Loaded {} saved palette(s), {} pinned", palettes.len(), pins.len());
        Ok(Self { palettes, pins })
    }

    /// Writes both blobs in one transaction.
    pub fn persist(&self, conn: &Connection) -> Result<()> {
        let palettes = serde_json::to_string(&self.palettes)?;
        let pins = serde_json::to_string(&self.pins)?;
        let tx = conn.unchecked_transaction()?;
        store::set(store::PALETTES_KEY, &palettes, &tx)?;
        store::set(store::PINS_KEY, &pins, &tx)?;
        tx.commit()?;
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&SavedPalette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pins.iter().any(|pin| pin == id)
    }

    /// Saved palettes that are pinned, in saved order.
    pub fn pinned(&self) -> Vec<&SavedPalette> {
        self.palettes
            .iter()
            .filter(|palette| self.is_pinned(&palette.id))
            .collect()
    }

    pub fn save(&mut self, name: &str, colors: Vec<String>) -> &SavedPalette {
        self.save_at(name, colors, Local::now())
    }

    fn save_at(&mut self, name: &str, colors: Vec<String>, now: DateTime<Local>) -> &SavedPalette {
        let mut stamp = now.timestamp_millis();
        while self.find(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let name = name.trim();
        let palette = SavedPalette {
            id: stamp.to_string(),
            name: if name.is_empty() {
                DEFAULT_PALETTE_NAME.to_string()
            } else {
                name.to_string()
            },
            colors,
            created_at: now.format("%-m/%-d/%Y").to_string(),
        };
        log::info!("Saved palette '{}' ({})", palette.name, palette.id);
        self.palettes.push(palette);
        &self.palettes[self.palettes.len() - 1]
    }

    /// Removes a palette and any pin on it.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.palettes.len();
        self.palettes.retain(|palette| palette.id != id);
        self.pins.retain(|pin| pin != id);
        let removed = self.palettes.len() != before;
        if removed {
            log::info!("Deleted palette {id}");
        }
        removed
    }

    /// Flips the pin on a saved palette and returns whether it is now pinned.
    pub fn toggle_pin(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        if self.is_pinned(id) {
            self.pins.retain(|pin| pin != id);
            false
        } else {
            self.pins.push(id.to_string());
            true
        }
    }
}
