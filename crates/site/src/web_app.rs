use folder_shell::{
    builtin_manifest, use_shell_runtime, FolderDesktop, FolderShellProvider, ShellAction,
    ShellManifest, WindowId,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Folder Desktop" />
        <Meta name="description" content="A desktop-style page of folders that open into windows." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

fn load_manifest() -> ShellManifest {
    builtin_manifest().unwrap_or_else(|err| {
        logging::warn!("falling back to an empty folder catalog: {err}");
        ShellManifest {
            schema_version: folder_shell::catalog::SHELL_MANIFEST_SCHEMA_VERSION,
            shell: Default::default(),
            folders: Vec::new(),
        }
    })
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <FolderShellProvider manifest=load_manifest()>
            <DeepLinkOpener />
            <FolderDesktop />
        </FolderShellProvider>
    }
}

/// Opens the folder named by `?open=<id>` once the shell has mounted.
#[component]
fn DeepLinkOpener() -> impl IntoView {
    let runtime = use_shell_runtime();
    let query = use_query_map();
    let requested = query.with_untracked(|map| map.get("open").cloned());

    if let Some(id) = requested {
        let window_id = WindowId::new(id);
        let known = runtime
            .manifest
            .with_value(|manifest| manifest.folder(&window_id).is_some());
        if known {
            runtime.dispatch_action(ShellAction::OpenWindow { window_id });
        } else {
            logging::warn!("ignoring deep link to unknown folder `{window_id}`");
        }
    }
}
