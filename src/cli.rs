/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::Connection;

use crate::color::{self, AccessibilityGrade};
use crate::library::Library;
use crate::palette::{self, Palette};
use crate::types::{GenerationMode, PALETTE_SIZE};

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Path to the palette database
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print random colors
    Random {
        #[arg(short = 'n', long = "count", default_value_t = PALETTE_SIZE)]
        count: usize,
    },
    /// Derive a color from a base color
    Harmony {
        base: String,
        #[arg(short = 'm', long = "mode", default_value = "complementary")]
        mode: String,
    },
    /// Print the friendly name of a color
    Name { hex: String },
    /// Print the readable text color for a background
    TextColor { hex: String },
    /// Print the contrast ratio between two colors
    Contrast { foreground: String, background: String },
    /// List the named colors
    Names,
    /// Generate and manage saved palettes
    Palette {
        #[command(subcommand)]
        command: PaletteCommand,
    },
    /// Write a palette as CSS custom properties
    Export {
        #[arg(long = "id")]
        id: Option<String>,
        /// Output file, or '-' for stdout
        #[arg(short = 'o', long = "output", default_value = palette::EXPORT_FILE_NAME)]
        output: PathBuf,
        colors: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaletteCommand {
    /// Print a freshly generated palette
    Generate {
        #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Random)]
        mode: ModeArg,
    },
    Save {
        #[arg(short = 'n', long = "name", default_value = "")]
        name: String,
        colors: Vec<String>,
    },
    List,
    Delete { id: String },
    Pin { id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Random,
    Harmonious,
}

impl From<ModeArg> for GenerationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Random => GenerationMode::Random,
            ModeArg::Harmonious => GenerationMode::Harmonious,
        }
    }
}

/// Execute a CLI command.
pub fn run(command: Command, conn: &Connection) -> Result<()> {
    match command {
        Command::Random { count } => {
            for _ in 0..count {
                println!("{}", color::random_color());
            }
        }
        Command::Harmony { base, mode } => handle_harmony(base, mode),
        Command::Name { hex } => println!("{}", color::color_name(&hex)),
        Command::TextColor { hex } => {
            if check_hex(&hex) {
                println!("{}", color::text_color(&hex));
            }
        }
        Command::Contrast {
            foreground,
            background,
        } => handle_contrast(foreground, background),
        Command::Names => {
            for (hex, name) in color::named_colors() {
                println!("{hex}  {name}");
            }
        }
        Command::Palette {
            command: PaletteCommand::Generate { mode },
        } => handle_palette_generate(mode.into()),
        Command::Palette {
            command: PaletteCommand::Save { name, colors },
        } => handle_palette_save(name, colors, conn)?,
        Command::Palette {
            command: PaletteCommand::List,
        } => handle_palette_list(conn)?,
        Command::Palette {
            command: PaletteCommand::Delete { id },
        } => handle_palette_delete(id, conn)?,
        Command::Palette {
            command: PaletteCommand::Pin { id },
        } => handle_palette_pin(id, conn)?,
        Command::Export { id, output, colors } => handle_export(id, output, colors, conn)?,
    }
    Ok(())
}

fn check_hex(hex: &str) -> bool {
    if color::is_valid_hex(hex) {
        return true;
    }
    println!("Invalid color '{hex}'. Please provide a hex code like #RRGGBB.");
    false
}

fn handle_harmony(base: String, mode: String) {
    if !check_hex(&base) {
        return;
    }
    if mode.parse::<color::Harmony>().is_err() {
        println!("Unknown mode '{mode}', falling back to a random color.");
    }
    println!("{}", color::harmonious_color(&base, &mode));
}

fn handle_contrast(foreground: String, background: String) {
    if !check_hex(&foreground) || !check_hex(&background) {
        return;
    }
    let score = color::accessibility_score(&foreground, &background);
    println!("{score:.2}:1 ({})", AccessibilityGrade::from_score(score));
}

fn handle_palette_generate(mode: GenerationMode) {
    let mut palette = Palette::random();
    if mode == GenerationMode::Harmonious {
        palette.regenerate(mode);
    }
    for slot in palette.slots() {
        println!("{}  {}", slot.hex, slot.name);
    }
}

fn handle_palette_save(name: String, colors: Vec<String>, conn: &Connection) -> Result<()> {
    if colors.len() != PALETTE_SIZE {
        println!("A palette needs exactly {PALETTE_SIZE} colors, got {}.", colors.len());
        return Ok(());
    }
    if !colors.iter().all(|hex| check_hex(hex)) {
        return Ok(());
    }
    let mut library = Library::load(conn)?;
    let saved = library.save(&name, colors);
    println!("Saved '{}' with id {}", saved.name, saved.id);
    library.persist(conn)?;
    Ok(())
}

fn handle_palette_list(conn: &Connection) -> Result<()> {
    let library = Library::load(conn)?;
    if library.palettes.is_empty() {
        println!("No saved palettes.");
        return Ok(());
    }
    for saved in &library.palettes {
        let marker = if library.is_pinned(&saved.id) { "*" } else { " " };
        println!(
            "{marker} {}  {}  {}  {}",
            saved.id,
            saved.name,
            saved.created_at,
            saved.colors.join(" ")
        );
    }
    Ok(())
}

fn handle_palette_delete(id: String, conn: &Connection) -> Result<()> {
    let mut library = Library::load(conn)?;
    if !library.delete(&id) {
        println!("Palette '{id}' not found");
        return Ok(());
    }
    library.persist(conn)?;
    Ok(())
}

fn handle_palette_pin(id: String, conn: &Connection) -> Result<()> {
    let mut library = Library::load(conn)?;
    if library.find(&id).is_none() {
        println!("Palette '{id}' not found");
        return Ok(());
    }
    if library.toggle_pin(&id) {
        println!("Pinned '{id}'");
    } else {
        println!("Unpinned '{id}'");
    }
    library.persist(conn)?;
    Ok(())
}

fn handle_export(
    id: Option<String>,
    output: PathBuf,
    colors: Vec<String>,
    conn: &Connection,
) -> Result<()> {
    let colors = match id {
        Some(id) => match Library::load(conn)?.find(&id) {
            Some(saved) => saved.colors.clone(),
            None => {
                println!("Palette '{id}' not found");
                return Ok(());
            }
        },
        None if colors.is_empty() => {
            println!("Nothing to export: pass --id or a list of colors.");
            return Ok(());
        }
        None => {
            if !colors.iter().all(|hex| check_hex(hex)) {
                return Ok(());
            }
            colors
        }
    };
    let css = palette::export_css(&colors);
    if output.as_os_str() == "-" {
        println!("{css}");
    } else {
        std::fs::write(&output, css)?;
        println!("Wrote {}", output.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_parse_harmony_defaults() {
        let cli = Cli::try_parse_from(["swatchr", "harmony", "#4ECDC4"]).unwrap();
        match cli.command {
            Some(Command::Harmony { base, mode }) => {
                assert_eq!(base, "#4ECDC4");
                assert_eq!(mode, "complementary");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_db_flag() {
        let cli = Cli::try_parse_from(["swatchr", "palette", "list", "--db", "/tmp/p.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/p.db")));
    }

    #[test]
    fn test_no_command_starts_tui() {
        let cli = Cli::try_parse_from(["swatchr"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_save_pin_delete_flow() {
        let conn = store::init_in_memory().unwrap();
        let colors = args(&["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"]);
        handle_palette_save("Primaries".to_string(), colors.clone(), &conn).unwrap();

        let library = Library::load(&conn).unwrap();
        assert_eq!(library.palettes.len(), 1);
        assert_eq!(library.palettes[0].name, "Primaries");
        assert_eq!(library.palettes[0].colors, colors);

        let id = library.palettes[0].id.clone();
        handle_palette_pin(id.clone(), &conn).unwrap();
        assert!(Library::load(&conn).unwrap().is_pinned(&id));

        handle_palette_delete(id, &conn).unwrap();
        let library = Library::load(&conn).unwrap();
        assert!(library.palettes.is_empty());
        assert!(library.pins.is_empty());
    }

    #[test]
    fn test_save_rejects_wrong_count_and_bad_hex() {
        let conn = store::init_in_memory().unwrap();
        handle_palette_save(String::new(), args(&["#FF0000"]), &conn).unwrap();
        handle_palette_save(
            String::new(),
            args(&["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "black"]),
            &conn,
        )
        .unwrap();
        assert!(Library::load(&conn).unwrap().palettes.is_empty());
    }

    #[test]
    fn test_export_saved_palette_to_file() {
        let conn = store::init_in_memory().unwrap();
        let colors = args(&["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"]);
        let mut library = Library::default();
        let id = library.save("Primaries", colors.clone()).id.clone();
        library.persist(&conn).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("color-palette.css");
        handle_export(Some(id), output.clone(), Vec::new(), &conn).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, palette::export_css(&colors));
    }
}
