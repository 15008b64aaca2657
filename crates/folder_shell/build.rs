use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MIN_WINDOW_WIDTH: i32 = 320;
const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FolderManifest {
    id: String,
    label: String,
    glyph: String,
    title: Option<String>,
    window_glyph: Option<String>,
    width: i32,
    height: i32,
    icon_x: i32,
    icon_y: i32,
    #[serde(default)]
    open_by_default: bool,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellManifest {
    schema_version: u32,
    #[serde(default)]
    shell: toml::Table,
    #[serde(default)]
    folder: Vec<FolderManifest>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ShellManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = HashSet::new();
    for folder in &manifest.folder {
        if folder.id.trim().is_empty() {
            panic!("folder with empty id in {}", path.display());
        }
        if !seen.insert(folder.id.clone()) {
            panic!("duplicate folder id `{}` in {}", folder.id, path.display());
        }
        if folder.width < MIN_WINDOW_WIDTH || folder.height < MIN_WINDOW_HEIGHT {
            panic!(
                "folder `{}` window {}x{} is below the {}x{} floor",
                folder.id, folder.width, folder.height, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            );
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize shell manifest");
    let generated = format!(
        "/// Build-time generated shell manifest JSON.\n\
pub const SHELL_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
