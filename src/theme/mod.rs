mod stylesheet;

use crate::color::{self, Rgb};
use crate::error::{PaletteError, PaletteResult};
use crate::palette::{NeonPalette, PaletteSwatch};

// Fixed blend anchors for the derived accent tones.
const DARK_BASE: Rgb = Rgb::new(0x05, 0x08, 0x12);
const NIGHT_BASE: Rgb = Rgb::new(0x0f, 0x14, 0x28);
const DARK_VIOLET: Rgb = Rgb::new(0x13, 0x02, 0x1f);

/// Result-grid cell states with dedicated color pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Unknown,
    Passed,
    Failed,
    Skipped,
}

type AccentListener = Box<dyn Fn(&str)>;

/// Base colors resolved from palette roles, with fixed fallbacks for roles
/// the document does not define. Gridline and border values may be `rgba()`
/// literals and are substituted into the stylesheet verbatim.
#[derive(Debug, Clone)]
pub(crate) struct BaseColors {
    pub(crate) background_hex: String,
    pub(crate) surface_hex: String,
    pub(crate) surface_alt_hex: String,
    pub(crate) header_hex: String,
    pub(crate) gridline_css: String,
    pub(crate) border_css: String,
    pub(crate) text_primary: String,
    pub(crate) text_muted: String,
    pub(crate) scroll_track_hex: String,
}

impl BaseColors {
    fn resolve(palette: &NeonPalette) -> Self {
        let role = |key: &str, fallback: &str| palette.role_value_or(key, fallback).to_string();
        Self {
            background_hex: role("surface_01", "#03060f"),
            surface_hex: role("surface_02", "#050a16"),
            surface_alt_hex: role("surface_03", "#0a0f21"),
            header_hex: role("surface_header", "#0a152d"),
            gridline_css: role("gridlines", "rgba(255, 255, 255, 0.08)"),
            border_css: role("outline", "rgba(255, 255, 255, 0.45)"),
            text_primary: role("text_primary", "#f5f6ff"),
            text_muted: role("text_secondary", "#b3c1ff"),
            scroll_track_hex: role("scroll_track", "#0b1124"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatePair {
    background: Rgb,
    text: Rgb,
}

/// Everything recomputed when the selected accent changes.
#[derive(Debug, Clone)]
pub(crate) struct DerivedColors {
    pub(crate) accent_hex: String,
    pub(crate) glow_hex: String,
    pub(crate) dim_hex: String,
    pub(crate) soft_hex: String,
    pub(crate) panel_hex: String,
    pub(crate) bloom_rgba: String,
    pub(crate) halo_rgba: String,
    pub(crate) selection_rgba: String,
    pub(crate) outline_rgba: String,
    unknown: StatePair,
    passed: StatePair,
    failed: StatePair,
    skipped: StatePair,
}

impl DerivedColors {
    fn derive(swatch: &PaletteSwatch) -> Self {
        let accent = Rgb::from_hex_lossy(&swatch.hex_value);
        Self {
            accent_hex: accent.hex(),
            glow_hex: accent.mix(color::WHITE, 0.45).hex(),
            dim_hex: accent.mix(DARK_BASE, 0.18).hex(),
            soft_hex: accent.mix(NIGHT_BASE, 0.35).hex(),
            panel_hex: accent.mix(DARK_VIOLET, 0.55).hex(),
            bloom_rgba: accent.rgba(0.55),
            halo_rgba: accent.rgba(0.20),
            selection_rgba: accent.rgba(0.35),
            outline_rgba: accent.rgba(0.65),
            unknown: StatePair {
                background: Rgb::new(0x14, 0x1c, 0x33).mix(accent, 0.15),
                text: Rgb::new(0xa8, 0xb4, 0xff),
            },
            passed: StatePair {
                background: accent.mix(NIGHT_BASE, 0.35),
                text: Rgb::new(0x07, 0x10, 0x1d),
            },
            failed: StatePair {
                background: Rgb::new(0xff, 0x3b, 0x6a).mix(Rgb::new(0x1c, 0x07, 0x15), 0.2),
                text: accent,
            },
            skipped: StatePair {
                background: Rgb::new(0x1a, 0x22, 0x38).mix(Rgb::new(0x2d, 0x31, 0x48), 0.5),
                text: Rgb::new(0xd5, 0xde, 0xfd),
            },
        }
    }

    fn pair(&self, state: CellState) -> StatePair {
        match state {
            CellState::Unknown => self.unknown,
            CellState::Passed => self.passed,
            CellState::Failed => self.failed,
            CellState::Skipped => self.skipped,
        }
    }
}

/// Theming session: resolved base colors, the selectable accent and every
/// color derived from it, plus the rendered stylesheet. The palette itself is
/// read at construction and never touched again.
pub struct NeonTheme {
    base: BaseColors,
    swatches: Vec<PaletteSwatch>,
    picker_grid: String,
    accent_index: usize,
    derived: DerivedColors,
    style_sheet: String,
    listeners: Vec<AccentListener>,
}

impl std::fmt::Debug for NeonTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeonTheme")
            .field("base", &self.base)
            .field("swatches", &self.swatches)
            .field("picker_grid", &self.picker_grid)
            .field("accent_index", &self.accent_index)
            .field("derived", &self.derived)
            .field("style_sheet", &self.style_sheet)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NeonTheme {
    /// Zero swatches is unreachable for a palette that passed loading, but is
    /// re-checked here since the derivation indexes into the sequence.
    pub fn new(palette: &NeonPalette) -> PaletteResult<Self> {
        let swatches = palette.swatches().to_vec();
        if swatches.is_empty() {
            return Err(PaletteError::NoSwatches);
        }

        let base = BaseColors::resolve(palette);
        let derived = DerivedColors::derive(&swatches[0]);
        let style_sheet = stylesheet::compose(&base, &derived);
        Ok(Self {
            base,
            swatches,
            picker_grid: palette.picker_grid.clone(),
            accent_index: 0,
            derived,
            style_sheet,
            listeners: Vec::new(),
        })
    }

    pub fn swatches(&self) -> &[PaletteSwatch] {
        &self.swatches
    }

    pub fn picker_grid(&self) -> &str {
        &self.picker_grid
    }

    pub fn accent_index(&self) -> usize {
        self.accent_index
    }

    pub fn accent_name(&self) -> &str {
        &self.swatches[self.accent_index].name
    }

    /// Normalized lowercase `#rrggbb` of the selected swatch.
    pub fn accent_hex(&self) -> &str {
        &self.derived.accent_hex
    }

    pub fn accent_glow_hex(&self) -> &str {
        &self.derived.glow_hex
    }

    pub fn accent_dim_hex(&self) -> &str {
        &self.derived.dim_hex
    }

    pub fn accent_soft_hex(&self) -> &str {
        &self.derived.soft_hex
    }

    pub fn accent_panel_hex(&self) -> &str {
        &self.derived.panel_hex
    }

    pub fn accent_bloom_rgba(&self) -> &str {
        &self.derived.bloom_rgba
    }

    pub fn accent_halo_rgba(&self) -> &str {
        &self.derived.halo_rgba
    }

    pub fn accent_selection_rgba(&self) -> &str {
        &self.derived.selection_rgba
    }

    pub fn accent_outline_rgba(&self) -> &str {
        &self.derived.outline_rgba
    }

    pub fn surface_hex(&self) -> &str {
        &self.base.surface_hex
    }

    pub fn border_css(&self) -> &str {
        &self.base.border_css
    }

    pub fn text_primary(&self) -> &str {
        &self.base.text_primary
    }

    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }

    pub fn cell_background(&self, state: CellState) -> Rgb {
        self.derived.pair(state).background
    }

    pub fn cell_text(&self, state: CellState) -> Rgb {
        self.derived.pair(state).text
    }

    /// Register a synchronous observer for accent changes; called with the
    /// new accent hex whenever `set_accent_index` causes an actual change.
    pub fn on_accent_changed(&mut self, listener: impl Fn(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select a swatch by index. Re-selecting the current index or passing an
    /// out-of-range index is silently ignored.
    pub fn set_accent_index(&mut self, index: usize) {
        if index == self.accent_index {
            return;
        }
        if index >= self.swatches.len() {
            tracing::debug!(index, swatches = self.swatches.len(), "accent index out of range");
            return;
        }

        self.accent_index = index;
        self.derived = DerivedColors::derive(&self.swatches[index]);
        self.style_sheet = stylesheet::compose(&self.base, &self.derived);
        tracing::debug!(index, accent = %self.derived.accent_hex, "accent changed");
        for listener in &self.listeners {
            listener(&self.derived.accent_hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteRole;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn test_palette() -> NeonPalette {
        palette_from(
            &[
                ("primary_accent", "#ff4d9e"),
                ("surface_01", "#03060f"),
                ("text_primary", "#f5f6ff"),
            ],
            &[("Sakura", "#FF4D9E"), ("Aurora", "#4dffd2"), ("Ion", "#7a5cff")],
        )
    }

    fn palette_from(roles: &[(&str, &str)], swatches: &[(&str, &str)]) -> NeonPalette {
        let roles_json: Vec<String> = roles
            .iter()
            .map(|(role, hex)| format!(r##"{{"role": "{role}", "hex": "{hex}"}}"##))
            .collect();
        let swatches_json: Vec<String> = swatches
            .iter()
            .map(|(name, hex)| format!(r##"{{"name": "{name}", "hex": "{hex}"}}"##))
            .collect();
        let json = format!(
            r##"{{"roles": [{}], "swatches": [{}]}}"##,
            roles_json.join(","),
            swatches_json.join(",")
        );

        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        path.push(format!("neonkabuki-theme-{}-{nanos}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        let palette = NeonPalette::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        palette
    }

    #[test]
    fn construction_starts_at_index_zero_with_normalized_accent() {
        let theme = NeonTheme::new(&test_palette()).unwrap();
        assert_eq!(theme.accent_index(), 0);
        assert_eq!(theme.accent_name(), "Sakura");
        // uppercase swatch hex comes back normalized
        assert_eq!(theme.accent_hex(), "#ff4d9e");
    }

    #[test]
    fn glow_is_the_accent_blended_toward_white() {
        let theme = NeonTheme::new(&test_palette()).unwrap();
        // per-channel blend of #ff4d9e and #ffffff at ratio 0.45
        assert_eq!(theme.accent_glow_hex(), "#ffaed3");
    }

    #[test]
    fn derived_tones_match_their_fixed_blends() {
        let theme = NeonTheme::new(&test_palette()).unwrap();
        let accent = Rgb::new(0xff, 0x4d, 0x9e);
        assert_eq!(theme.accent_dim_hex(), accent.mix(DARK_BASE, 0.18).hex());
        assert_eq!(theme.accent_soft_hex(), accent.mix(NIGHT_BASE, 0.35).hex());
        assert_eq!(theme.accent_panel_hex(), accent.mix(DARK_VIOLET, 0.55).hex());
        assert_eq!(theme.accent_bloom_rgba(), accent.rgba(0.55));
        assert_eq!(theme.accent_halo_rgba(), accent.rgba(0.20));
        assert_eq!(theme.accent_selection_rgba(), accent.rgba(0.35));
        assert_eq!(theme.accent_outline_rgba(), accent.rgba(0.65));
    }

    #[test]
    fn state_pairs_follow_the_fixed_table() {
        let theme = NeonTheme::new(&test_palette()).unwrap();
        let accent = Rgb::new(0xff, 0x4d, 0x9e);

        assert_eq!(
            theme.cell_background(CellState::Unknown),
            Rgb::new(0x14, 0x1c, 0x33).mix(accent, 0.15)
        );
        assert_eq!(theme.cell_text(CellState::Unknown), Rgb::new(0xa8, 0xb4, 0xff));
        assert_eq!(
            theme.cell_background(CellState::Passed),
            accent.mix(NIGHT_BASE, 0.35)
        );
        assert_eq!(theme.cell_text(CellState::Passed), Rgb::new(0x07, 0x10, 0x1d));
        assert_eq!(theme.cell_text(CellState::Failed), accent);
        assert_eq!(
            theme.cell_background(CellState::Skipped),
            Rgb::new(0x1a, 0x22, 0x38).mix(Rgb::new(0x2d, 0x31, 0x48), 0.5)
        );
    }

    #[test]
    fn set_accent_index_updates_and_notifies_once() {
        let mut theme = NeonTheme::new(&test_palette()).unwrap();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        theme.on_accent_changed(move |hex| sink.borrow_mut().push(hex.to_string()));

        theme.set_accent_index(1);
        assert_eq!(theme.accent_index(), 1);
        assert_eq!(theme.accent_hex(), "#4dffd2");
        assert_eq!(theme.accent_name(), "Aurora");
        assert_eq!(*seen.borrow(), vec!["#4dffd2".to_string()]);
    }

    #[test]
    fn set_accent_index_is_a_noop_for_current_and_out_of_range() {
        let mut theme = NeonTheme::new(&test_palette()).unwrap();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        theme.on_accent_changed(move |hex| sink.borrow_mut().push(hex.to_string()));

        theme.set_accent_index(0);
        theme.set_accent_index(99);
        assert_eq!(theme.accent_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn stylesheet_substitutes_current_colors() {
        let mut theme = NeonTheme::new(&test_palette()).unwrap();
        let css = theme.style_sheet().to_string();
        assert!(css.contains("#03060f"));
        assert!(css.contains(theme.accent_glow_hex()));
        assert!(css.contains(theme.accent_outline_rgba()));

        theme.set_accent_index(2);
        let recomposed = theme.style_sheet();
        assert_ne!(recomposed, css);
        assert!(recomposed.contains(theme.accent_glow_hex()));
    }

    #[test]
    fn base_colors_fall_back_when_roles_are_missing() {
        let palette = palette_from(&[("primary_accent", "#ff4d9e")], &[("Sakura", "#ff4d9e")]);
        let theme = NeonTheme::new(&palette).unwrap();
        assert_eq!(theme.surface_hex(), "#050a16");
        assert_eq!(theme.border_css(), "rgba(255, 255, 255, 0.45)");
        assert_eq!(theme.text_primary(), "#f5f6ff");
    }

    #[test]
    fn unparsable_swatch_hex_degrades_to_black() {
        let palette = palette_from(&[("primary_accent", "#ff4d9e")], &[("Broken", "chartreuse")]);
        let theme = NeonTheme::new(&palette).unwrap();
        assert_eq!(theme.accent_hex(), "#000000");
    }

    #[test]
    fn construction_rejects_a_palette_without_swatches() {
        // Assembled directly since loading already rejects empty swatch lists.
        let roles = HashMap::from([(
            "primary_accent".to_string(),
            PaletteRole {
                role: "primary_accent".to_string(),
                name: "primary_accent".to_string(),
                value: "#ff4d9e".to_string(),
                usage: Vec::new(),
            },
        )]);
        let palette = NeonPalette::from_parts_for_tests(roles, Vec::new());
        let error = NeonTheme::new(&palette).unwrap_err();
        assert!(matches!(error, PaletteError::NoSwatches));
    }
}
