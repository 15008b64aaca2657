//! Folder catalog and shell configuration embedded from `shell.toml` at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::ShellConfig,
    model::{PointerPosition, Viewport, WindowId, WindowRect},
    surface::{IconView, PanelView, ShellProjection},
};

include!(concat!(env!("OUT_DIR"), "/shell_manifest_generated.rs"));

pub const SHELL_MANIFEST_SCHEMA_VERSION: u32 = 1;

/// One desktop folder and the window it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub id: String,
    pub label: String,
    pub glyph: String,
    pub title: Option<String>,
    pub window_glyph: Option<String>,
    pub width: i32,
    pub height: i32,
    pub icon_x: i32,
    pub icon_y: i32,
    #[serde(default)]
    pub open_by_default: bool,
    #[serde(default)]
    pub body: String,
}

impl FolderEntry {
    pub fn window_id(&self) -> WindowId {
        WindowId::new(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellManifest {
    pub schema_version: u32,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default, rename = "folder")]
    pub folders: Vec<FolderEntry>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("shell manifest is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported shell manifest schema {found} (expected {expected})")]
    Schema { found: u32, expected: u32 },
}

impl ShellManifest {
    /// Parses a manifest in its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON or an unknown schema version.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let manifest: Self = serde_json::from_str(raw)?;
        if manifest.schema_version != SHELL_MANIFEST_SCHEMA_VERSION {
            return Err(CatalogError::Schema {
                found: manifest.schema_version,
                expected: SHELL_MANIFEST_SCHEMA_VERSION,
            });
        }
        Ok(manifest)
    }

    pub fn folder(&self, window_id: &WindowId) -> Option<&FolderEntry> {
        self.folders.iter().find(|folder| folder.id == window_id.as_str())
    }

    /// Builds the initial projection: every window hidden at its default size, every icon at its
    /// authored position.
    pub fn projection(&self, viewport: Viewport) -> ShellProjection {
        let mut projection = ShellProjection::new(viewport);
        for folder in &self.folders {
            projection.insert_panel(PanelView {
                window_id: folder.window_id(),
                title: folder.title.clone().unwrap_or_default(),
                glyph: folder.window_glyph.clone(),
                body: folder.body.clone(),
                rect: WindowRect {
                    x: 0,
                    y: 0,
                    w: folder.width,
                    h: folder.height,
                },
                visible: false,
                maximized: false,
                active: false,
                order: 0,
            });
            projection.insert_icon(IconView {
                window_id: folder.window_id(),
                label: folder.label.clone(),
                glyph: folder.glyph.clone(),
                position: PointerPosition::new(folder.icon_x, folder.icon_y),
                selected: false,
            });
        }
        projection
    }
}

/// The manifest compiled into this crate from `shell.toml`.
///
/// # Errors
///
/// Returns [`CatalogError`] if the embedded manifest cannot be parsed.
pub fn builtin_manifest() -> Result<ShellManifest, CatalogError> {
    ShellManifest::from_json(SHELL_MANIFEST_JSON)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::ShellSurface;

    #[test]
    fn builtin_manifest_parses_with_defaults() {
        let manifest = builtin_manifest().expect("builtin manifest");
        assert_eq!(manifest.shell.narrow_breakpoint_px, 640);
        assert_eq!(manifest.shell.min_window_width, 320);
        assert!(manifest.folders.iter().any(|folder| folder.open_by_default));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = ShellManifest::from_json(r#"{ "schema_version": 9 }"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Schema {
                found: 9,
                expected: 1
            }
        ));
        assert!(matches!(
            ShellManifest::from_json("not json"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn projection_hides_windows_and_places_icons() {
        let manifest = ShellManifest::from_json(
            r#"{
                "schema_version": 1,
                "folder": [
                    { "id": "a", "label": "A", "glyph": "x", "title": null,
                      "window_glyph": null, "width": 400, "height": 300,
                      "icon_x": 5, "icon_y": 6 }
                ]
            }"#,
        )
        .expect("manifest");
        let projection = manifest.projection(Viewport::default());
        let a = WindowId::new("a");

        let panel = projection.panel(&a).expect("panel");
        assert!(!panel.visible);
        assert_eq!((panel.rect.w, panel.rect.h), (400, 300));
        assert_eq!(projection.icon_position(&a), Some(PointerPosition::new(5, 6)));
        assert_eq!(projection.window_meta(&a).unwrap().title, None);
    }
}
