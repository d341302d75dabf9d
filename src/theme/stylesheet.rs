use super::{BaseColors, DerivedColors};

/// Render the full GTK-flavored stylesheet for the current base + derived
/// colors. Deterministic: same inputs, same text.
pub(super) fn compose(base: &BaseColors, derived: &DerivedColors) -> String {
    format!(
        "
window.neon-root {{
  background-color: {background};
  color: {text_primary};
  font-family: 'Bahnschrift', 'Segoe UI', 'Helvetica Neue', sans-serif;
  font-size: 13px;
}}
.neon-root label.summary {{
  color: {text_muted};
  font-size: 14px;
}}
.neon-root label.section {{
  color: {text_primary};
  text-transform: uppercase;
  letter-spacing: 0.12em;
  font-size: 11px;
}}
.neon-root entry,
.neon-root textview {{
  background-color: {surface};
  border: 1px solid {accent_outline};
  border-radius: 12px;
  padding: 6px 10px;
}}
.neon-root textview.activity-log {{
  background-color: {surface_alt};
  border-color: {accent_outline};
}}
.neon-root button {{
  background-color: transparent;
  border: 1px solid {accent_outline};
  border-radius: 18px;
  padding: 8px 20px;
  font-weight: 600;
  letter-spacing: 0.08em;
}}
.neon-root button:hover {{
  border-color: {accent_glow};
  color: {accent_glow};
}}
.neon-root button:active {{
  background-color: {accent_soft};
}}
.neon-root .picker-frame {{
  background-color: {surface_alt};
  border: 1px solid {accent_outline};
  border-radius: 18px;
  padding: 12px;
}}
.neon-root notebook > stack {{
  border: 1px solid {accent_outline};
  background-color: {surface};
  border-radius: 18px;
  margin: 12px;
  padding: 8px;
}}
.neon-root notebook tab {{
  background-color: {accent_panel};
  color: {text_primary};
  border: 1px solid {accent_outline};
  border-radius: 18px;
  padding: 6px 24px;
  margin: 0px 6px;
  min-width: 140px;
  letter-spacing: 0.08em;
}}
.neon-root notebook tab:checked {{
  background-color: {accent};
  color: {background};
  border-color: {accent_glow};
}}
.neon-root notebook tab:hover {{
  color: {accent_glow};
  border-color: {accent_glow};
}}
.neon-root columnview {{
  background-color: {surface};
  border: 1px solid {accent_outline};
}}
.neon-root columnview row:nth-child(even) {{
  background-color: {surface_alt};
}}
.neon-root columnview row {{
  border-bottom: 1px solid {gridline};
}}
.neon-root columnview row:selected {{
  background-color: {accent_selection};
  color: {background};
}}
.neon-root columnview > header {{
  background-color: {header};
  color: {text_primary};
  padding: 8px 10px;
  border-right: 1px solid {accent_outline};
}}
.neon-root menubar {{
  background-color: {background};
  color: {text_primary};
}}
.neon-root menubar > item:hover {{
  background-color: {accent_dim};
}}
.neon-root popover.menu {{
  background-color: {surface};
  border: 1px solid {accent_outline};
}}
.neon-root popover.menu modelbutton:hover {{
  background-color: {accent_soft};
}}
tooltip {{
  background-color: {surface_alt};
  color: {text_primary};
  border: 1px solid {accent_outline};
}}
.neon-root scrollbar {{
  background: {scroll_track};
  border: none;
  margin: 0px;
}}
.neon-root scrollbar slider {{
  background: {accent_dim};
  border-radius: 6px;
  border: 1px solid {accent_outline};
}}
.neon-root scrollbar slider:hover {{
  background: {accent};
}}
.neon-root .accent-bloom {{
  box-shadow: 0 0 18px {accent_bloom},
              0 0 42px {accent_halo};
}}
.neon-root .hairline {{
  border-color: {border};
}}
",
        background = base.background_hex,
        surface = base.surface_hex,
        surface_alt = base.surface_alt_hex,
        header = base.header_hex,
        gridline = base.gridline_css,
        border = base.border_css,
        text_primary = base.text_primary,
        text_muted = base.text_muted,
        scroll_track = base.scroll_track_hex,
        accent = derived.accent_hex,
        accent_glow = derived.glow_hex,
        accent_dim = derived.dim_hex,
        accent_soft = derived.soft_hex,
        accent_panel = derived.panel_hex,
        accent_bloom = derived.bloom_rgba,
        accent_halo = derived.halo_rgba,
        accent_selection = derived.selection_rgba,
        accent_outline = derived.outline_rgba,
    )
}
