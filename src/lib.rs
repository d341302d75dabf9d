pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod picker;
pub mod theme;

pub use color::Rgb;
pub use config::{resolve_palette_path, PALETTE_ENV_VAR};
pub use error::{PaletteError, PaletteResult};
pub use palette::{load_default, NeonPalette, PaletteCache, PaletteRole, PaletteSwatch};
pub use picker::PickerGrid;
pub use theme::{CellState, NeonTheme};

/// Load the palette (explicit path or memoized default), derive the theme and
/// return its stylesheet. Entrypoint used by the CLI and host integrations.
pub fn render_stylesheet(path: Option<&std::path::Path>) -> PaletteResult<String> {
    let theme = match path {
        Some(path) => NeonTheme::new(&NeonPalette::load(path)?)?,
        None => NeonTheme::new(load_default()?)?,
    };
    tracing::info!(
        accent = %theme.accent_hex(),
        swatches = theme.swatches().len(),
        "derived neon theme"
    );
    Ok(theme.style_sheet().to_string())
}
