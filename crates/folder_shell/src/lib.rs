pub mod boot;
pub mod catalog;
pub mod components;
pub mod config;
pub mod effect_executor;
pub mod focus;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod surface;
pub mod taskbar;
pub mod window_manager;

pub use catalog::{builtin_manifest, CatalogError, FolderEntry, ShellManifest};
pub use components::FolderDesktop;
pub use config::ShellConfig;
pub use effect_executor::apply_effects;
pub use interaction::{InteractionState, PointerTarget};
pub use model::*;
pub use reducer::{reduce_shell, ReducerError, RuntimeEffect, ShellAction};
pub use runtime_context::{use_shell_runtime, FolderShellProvider, ShellRuntimeContext};
pub use surface::{IconView, PanelView, ShellProjection, ShellSurface};
