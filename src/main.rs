use std::path::PathBuf;

use anyhow::Context;

/// Prints the derived stylesheet for the palette at the given path, or the
/// default palette location when no argument is given.
fn main() -> anyhow::Result<()> {
    neonkabuki::logging::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let css = neonkabuki::render_stylesheet(path.as_deref())
        .context("failed to derive the neon theme")?;
    println!("{css}");
    Ok(())
}
