use crate::error::BootError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANVAS_ID: &str = "canvas";
pub const DEFAULT_ROM_URL: &str = "game.gba";
pub const DEFAULT_ROM_FILE_NAME: &str = "game.gba";
pub const DEFAULT_GAMES_DIR: &str = "/data/games";

/// Where the page keeps its canvas and ROM, and where the module expects uploads.
///
/// Every field is optional when deserialized, so a page only needs to pass the
/// values it wants to change:
/// ```
/// # use gba_boot::BootConfig;
/// let config: BootConfig = serde_json::from_str(r#"{ "romUrl": "roms/demo.gba" }"#).unwrap();
/// assert_eq!(config.rom_path(), "/data/games/game.gba");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootConfig {
    /// DOM id of the canvas the module renders to
    pub canvas_id: String,
    pub rom_url: String,
    /// Name of the uploaded file. The module files it under `games_dir`.
    pub rom_file_name: String,
    pub games_dir: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            rom_url: DEFAULT_ROM_URL.to_owned(),
            rom_file_name: DEFAULT_ROM_FILE_NAME.to_owned(),
            games_dir: DEFAULT_GAMES_DIR.to_owned(),
        }
    }
}

impl BootConfig {
    /// Virtual filesystem path the uploaded ROM is loaded from.
    pub fn rom_path(&self) -> String {
        format!(
            "{}/{}",
            self.games_dir.trim_end_matches('/'),
            self.rom_file_name
        )
    }

    pub fn validate(&self) -> Result<(), BootError> {
        let fields = [
            ("canvasId", &self.canvas_id),
            ("romUrl", &self.rom_url),
            ("romFileName", &self.rom_file_name),
            ("gamesDir", &self.games_dir),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(BootError::InvalidConfig(format!(
                "`{}` must not be empty",
                name
            )));
        }

        if !self.games_dir.starts_with('/') {
            return Err(BootError::InvalidConfig(format!(
                "`gamesDir` must be absolute, got {:?}",
                self.games_dir
            )));
        }

        if self.rom_file_name.contains('/') {
            return Err(BootError::InvalidConfig(format!(
                "`romFileName` must be a bare file name, got {:?}",
                self.rom_file_name
            )));
        }

        Ok(())
    }
}
