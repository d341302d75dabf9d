use std::path::{Path, PathBuf};

use crate::error::{PaletteError, PaletteResult};

/// Environment variable that overrides the palette file location.
pub const PALETTE_ENV_VAR: &str = "NEON_KABUKI_PALETTE_PATH";

const APP_DIR: &str = "neonkabuki";
const PALETTE_FILE: &str = "palette.json";

/// Resolve the palette path: the env override wins (with `~` expansion),
/// otherwise the XDG config location for this app.
pub fn resolve_palette_path() -> PaletteResult<PathBuf> {
    let (override_path, xdg_config_home, home) = palette_env_dirs();
    resolve_palette_path_with(
        override_path.as_deref(),
        xdg_config_home.as_deref(),
        home.as_deref(),
    )
}

fn palette_env_dirs() -> (Option<PathBuf>, Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os(PALETTE_ENV_VAR).map(PathBuf::from),
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_palette_path_with(
    override_path: Option<&Path>,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> PaletteResult<PathBuf> {
    if let Some(path) = override_path.filter(|path| !path.as_os_str().is_empty()) {
        return expand_home(path, home);
    }

    let mut path = config_root(xdg_config_home, home)?;
    path.push(APP_DIR);
    path.push(PALETTE_FILE);
    Ok(path)
}

/// Expand a leading `~` against HOME; other paths pass through untouched.
fn expand_home(path: &Path, home: Option<&Path>) -> PaletteResult<PathBuf> {
    let Some(rest) = path.to_str().and_then(|raw| raw.strip_prefix('~')) else {
        return Ok(path.to_path_buf());
    };
    let home = home.ok_or(PaletteError::MissingHomeDirectory)?;
    Ok(home.join(rest.trim_start_matches('/')))
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PaletteResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(PaletteError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
