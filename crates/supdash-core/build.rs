//! Build script for supdash-core
//!
//! Scans `views/` for override view definitions and generates a static
//! manifest that embeds each one, so existence checks at runtime are plain
//! lookups instead of filesystem scans.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=views");

    if let Err(err) = generate_view_manifest() {
        println!("cargo:warning=Failed to generate override view manifest: {err}");
        // Still emit an empty manifest so the crate builds without views.
        if let Ok(out_dir) = env::var("OUT_DIR") {
            fs::write(
                Path::new(&out_dir).join("view_manifest.rs"),
                render_manifest(&[]),
            )
            .ok();
        }
    }
}

fn generate_view_manifest() -> io::Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("CARGO_MANIFEST_DIR not set: {err}"),
        )
    })?);
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(|err| {
        io::Error::new(io::ErrorKind::NotFound, format!("OUT_DIR not set: {err}"))
    })?);

    let views_dir = manifest_dir.join("views");
    let mut views = Vec::new();
    if views_dir.exists() {
        collect_views(&views_dir, &views_dir, &mut views)?;
    }
    views.sort();

    fs::create_dir_all(&out_dir)?;
    fs::write(out_dir.join("view_manifest.rs"), render_manifest(&views))?;

    Ok(())
}

/// Collect `(key, absolute path)` pairs for every `.toml` file under `dir`.
fn collect_views(root: &Path, dir: &Path, out: &mut Vec<(String, PathBuf)>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            println!("cargo:rerun-if-changed={}", path.display());
            collect_views(root, &path, out)?;
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }

        println!("cargo:rerun-if-changed={}", path.display());

        let relative = path
            .strip_prefix(root)
            .map_err(|err| io::Error::other(err.to_string()))?
            .with_extension("view");
        let key = relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy().to_lowercase())
            .collect::<Vec<_>>()
            .join("/");

        out.push((key, path));
    }

    Ok(())
}

fn render_manifest(views: &[(String, PathBuf)]) -> String {
    let mut code = String::from(
        "// Generated by build.rs from the views/ directory.\n\
         pub(crate) static VIEW_SOURCES: &[(&str, &str)] = &[\n",
    );
    for (key, path) in views {
        let _ = writeln!(
            code,
            "    ({key:?}, include_str!({:?})),",
            path.display().to_string()
        );
    }
    code.push_str("];\n");
    code
}
