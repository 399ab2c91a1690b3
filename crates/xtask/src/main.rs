use anyhow::Context;
use serde::Deserialize;

/// Runner-only crates the domain must not depend on.
const DOMAIN_FORBIDDEN: &[&str] = &["anyhow", "dotenvy", "tracing", "tracing-subscriber"];

const DOMAIN_PACKAGE: &str = "muster-domain";

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = domain_violations(&metadata)?;

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_PACKAGE} depends on runner-only crates: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: {DOMAIN_PACKAGE} OK");
    Ok(())
}

/// Normal (non-dev) dependencies of the domain that are on the forbidden list.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.is_none())
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}
