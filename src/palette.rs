/// The working palette: five lockable slots refilled by the generator.
use crate::color::{Harmony, color_name, random_color};
use crate::types::{ColorSlot, GenerationMode, PALETTE_SIZE};

/// File name used when exporting a palette as CSS.
pub const EXPORT_FILE_NAME: &str = "color-palette.css";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Palette {
    slots: Vec<ColorSlot>,
}

fn slot(hex: String) -> ColorSlot {
    ColorSlot {
        name: color_name(&hex).to_string(),
        hex,
        locked: false,
    }
}

impl Palette {
    pub fn random() -> Self {
        Self {
            slots: (0..PALETTE_SIZE).map(|_| slot(random_color())).collect(),
        }
    }

    /// Hydrate a palette from a color list. Every slot starts unlocked.
    /// Extra colors are dropped and missing ones are filled in randomly.
    pub fn from_colors(colors: &[String]) -> Self {
        let mut slots: Vec<ColorSlot> = colors
            .iter()
            .take(PALETTE_SIZE)
            .map(|hex| slot(hex.clone()))
            .collect();
        while slots.len() < PALETTE_SIZE {
            slots.push(slot(random_color()));
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[ColorSlot] {
        &self.slots
    }

    pub fn hexes(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.hex.clone()).collect()
    }

    pub fn toggle_lock(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.locked = !slot.locked;
        }
    }

    pub fn regenerate(&mut self, mode: GenerationMode) {
        match mode {
            GenerationMode::Random => {
                for current in self.slots.iter_mut().filter(|slot| !slot.locked) {
                    *current = slot(random_color());
                }
            }
            GenerationMode::Harmonious => {
                let base = self
                    .slots
                    .iter()
                    .find(|slot| !slot.locked)
                    .map(|slot| slot.hex.clone())
                    .unwrap_or_else(random_color);
                let mut slots = Vec::with_capacity(PALETTE_SIZE);
                slots.push(slot(base.clone()));
                for index in 1..PALETTE_SIZE {
                    let harmony = if index % 2 == 0 {
                        Harmony::Complementary
                    } else {
                        Harmony::Analogous
                    };
                    slots.push(slot(harmony.apply(&base)));
                }
                self.slots = slots;
            }
        }
    }
}

/// Render colors as a `:root` block of CSS custom properties.
pub fn export_css(colors: &[String]) -> String {
    let variables = colors
        .iter()
        .enumerate()
        .map(|(index, hex)| format!("  --color-{}: {hex};", index + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{variables}\n}}")
}
