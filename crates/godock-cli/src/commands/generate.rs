use anyhow::Context;
use godock_build::{DockerfileGenerator, write_dockerfile};
use godock_core::{GoModule, GodockConfig};
use std::path::{Path, PathBuf};

/// Where the rendered Dockerfile goes.
pub enum Target {
    File(PathBuf),
    Stdout,
}

/// Scan the manifest, render the Dockerfile, and write it out.
///
/// `port` overrides `[build].port` from godock.toml.
pub fn generate(manifest: &Path, port: Option<i64>, target: &Target) -> anyhow::Result<()> {
    let project_dir = match manifest.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let config = GodockConfig::load(project_dir)?;

    let module = GoModule::from_manifest(manifest)
        .with_context(|| format!("failed to read module metadata from {}", manifest.display()))?;
    tracing::debug!(
        module = %module.module_path,
        go_version = %module.go_version,
        "scanned manifest"
    );

    let port = match port {
        Some(port) => port,
        None => config.build.port,
    };
    let dockerfile = DockerfileGenerator::new(&config.build, &module, port).render()?;

    match target {
        Target::File(path) => {
            write_dockerfile(path, &dockerfile)?;
            println!("Generated {} for {}", path.display(), module.name);
        }
        Target::Stdout => print!("{dockerfile}"),
    }

    Ok(())
}
