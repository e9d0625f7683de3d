use serde::{Deserialize, Serialize};

pub type PaletteId = String;

/// Number of slots in the working palette.
pub const PALETTE_SIZE: usize = 5;

/// Name given to saved palettes when the user supplies none.
pub const DEFAULT_PALETTE_NAME: &str = "Untitled Palette";

/// A single position of the working palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColorSlot {
    pub hex: String,
    pub name: String,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavedPalette {
    pub id: PaletteId,
    pub name: String,
    pub colors: Vec<String>,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Random,
    Harmonious,
}

impl GenerationMode {
    pub fn toggle(&self) -> Self {
        match self {
            GenerationMode::Random => GenerationMode::Harmonious,
            GenerationMode::Harmonious => GenerationMode::Random,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationMode::Random => "Random",
            GenerationMode::Harmonious => "Harmonious",
        }
    }
}
