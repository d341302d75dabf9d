use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;

use crate::config::resolve_palette_path;
use crate::error::{PaletteError, PaletteResult};

pub const PRIMARY_ACCENT_ROLE: &str = "primary_accent";

const ROLES_KEY: &str = "roles";
const SWATCHES_KEY: &str = "swatches";

/// A named semantic color slot ("primary text", "surface background", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRole {
    pub role: String,
    pub name: String,
    pub value: String,
    pub usage: Vec<String>,
}

/// A user-selectable accent color; sequence order is the addressable index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSwatch {
    pub name: String,
    pub hex_value: String,
}

/// Immutable palette document: metadata, role map and ordered swatch list.
#[derive(Debug, Clone)]
pub struct NeonPalette {
    pub theme: String,
    pub codename: String,
    pub version: String,
    pub updated_at: String,
    pub owner: String,
    pub description: String,
    pub picker_grid: String,
    roles: HashMap<String, PaletteRole>,
    swatches: Vec<PaletteSwatch>,
    notes: Vec<String>,
}

/// Raw document envelope. The `roles`/`swatches`/`notes` sections stay as
/// loose JSON so individually malformed entries can be dropped instead of
/// failing the whole document.
#[derive(Debug, Default, Deserialize)]
struct RawPalette {
    theme: Option<String>,
    codename: Option<String>,
    version: Option<String>,
    updated_at: Option<String>,
    owner: Option<String>,
    description: Option<String>,
    picker_grid: Option<String>,
    roles: Option<Value>,
    swatches: Option<Value>,
    notes: Option<Value>,
}

impl NeonPalette {
    /// Load unconditionally from an explicit path.
    pub fn load(path: &Path) -> PaletteResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PaletteError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => PaletteError::ReadFile {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let raw: RawPalette =
            serde_json::from_str(&text).map_err(|source| PaletteError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;
        let palette = Self::from_raw(raw)?;
        tracing::debug!(
            ?path,
            roles = palette.roles.len(),
            swatches = palette.swatches.len(),
            "loaded neon palette"
        );
        Ok(palette)
    }

    fn from_raw(raw: RawPalette) -> PaletteResult<Self> {
        let roles_payload = raw
            .roles
            .as_ref()
            .and_then(Value::as_array)
            .ok_or(PaletteError::MissingArray(ROLES_KEY))?;
        let swatches_payload = raw
            .swatches
            .as_ref()
            .and_then(Value::as_array)
            .ok_or(PaletteError::MissingArray(SWATCHES_KEY))?;

        let roles = parse_roles(roles_payload)?;
        let swatches = parse_swatches(swatches_payload)?;
        let notes = parse_notes(raw.notes.as_ref());

        Ok(Self {
            theme: text_or(raw.theme, "Neon Kabuki Cherry Petal"),
            codename: text_or(raw.codename, "Sakura Nova Control Surface 1.0"),
            version: text_or(raw.version, "1.0.0"),
            updated_at: raw.updated_at.unwrap_or_default(),
            owner: text_or(raw.owner, "Make All Experience Guild"),
            description: raw.description.unwrap_or_default(),
            picker_grid: text_or(raw.picker_grid, "4x4"),
            roles,
            swatches,
            notes,
        })
    }

    pub fn roles(&self) -> &HashMap<String, PaletteRole> {
        &self.roles
    }

    pub fn swatches(&self) -> &[PaletteSwatch] {
        &self.swatches
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn role_value(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(|entry| entry.value.as_str())
    }

    pub fn role_value_or<'a>(&'a self, role: &str, default: &'a str) -> &'a str {
        self.role_value(role).unwrap_or(default)
    }

    pub fn primary_accent(&self) -> PaletteResult<&str> {
        self.role_value(PRIMARY_ACCENT_ROLE)
            .ok_or_else(|| PaletteError::MissingRole(PRIMARY_ACCENT_ROLE.to_string()))
    }
}

fn parse_roles(payload: &[Value]) -> PaletteResult<HashMap<String, PaletteRole>> {
    let mut roles = HashMap::new();
    for item in payload {
        let role = trimmed_field(item, "role");
        // `hex` wins over `rgba` when both are present
        let value = trimmed_field(item, "hex").or_else(|| trimmed_field(item, "rgba"));
        let (Some(role), Some(value)) = (role, value) else {
            tracing::trace!("dropping role entry without role key or color value");
            continue;
        };
        let name = trimmed_field(item, "name").unwrap_or_else(|| role.clone());
        let usage = item
            .get("usage")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(text_value)
                    .filter(|entry| !entry.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        // last-write-wins on duplicate role keys
        roles.insert(
            role.clone(),
            PaletteRole {
                role,
                name,
                value,
                usage,
            },
        );
    }
    if roles.is_empty() {
        return Err(PaletteError::EmptySection(ROLES_KEY));
    }
    Ok(roles)
}

fn parse_swatches(payload: &[Value]) -> PaletteResult<Vec<PaletteSwatch>> {
    let mut swatches = Vec::new();
    for item in payload {
        let name = trimmed_field(item, "name");
        let hex_value = trimmed_field(item, "hex");
        let (Some(name), Some(hex_value)) = (name, hex_value) else {
            tracing::trace!("dropping swatch entry without name or hex");
            continue;
        };
        swatches.push(PaletteSwatch { name, hex_value });
    }
    if swatches.is_empty() {
        return Err(PaletteError::EmptySection(SWATCHES_KEY));
    }
    Ok(swatches)
}

fn parse_notes(payload: Option<&Value>) -> Vec<String> {
    payload
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(text_value)
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Trimmed string field, `None` when absent, non-text or blank.
fn trimmed_field(item: &Value, key: &str) -> Option<String> {
    let value = text_value(item.get(key)?)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Single-slot palette cache. The first successful load sticks for the
/// lifetime of the cache; errors are not cached and retry on the next call.
pub struct PaletteCache {
    slot: OnceLock<NeonPalette>,
}

impl PaletteCache {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> PaletteResult<&NeonPalette> {
        if let Some(palette) = self.slot.get() {
            return Ok(palette);
        }
        let palette = NeonPalette::load(path)?;
        Ok(self.slot.get_or_init(|| palette))
    }
}

impl Default for PaletteCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl NeonPalette {
    /// Assemble a palette directly, bypassing load-time validation.
    pub(crate) fn from_parts_for_tests(
        roles: HashMap<String, PaletteRole>,
        swatches: Vec<PaletteSwatch>,
    ) -> Self {
        Self {
            theme: "Neon Kabuki Cherry Petal".to_string(),
            codename: "Sakura Nova Control Surface 1.0".to_string(),
            version: "1.0.0".to_string(),
            updated_at: String::new(),
            owner: "Make All Experience Guild".to_string(),
            description: String::new(),
            picker_grid: "4x4".to_string(),
            roles,
            swatches,
            notes: Vec::new(),
        }
    }
}

static DEFAULT_CACHE: PaletteCache = PaletteCache::new();

/// Memoized load from the resolved default path (env override or XDG
/// location); computed once per process.
pub fn load_default() -> PaletteResult<&'static NeonPalette> {
    let path = resolve_palette_path()?;
    DEFAULT_CACHE.get_or_load(&path)
}
