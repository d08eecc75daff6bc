//! Write the default configuration file.

use std::path::Path;

use anyhow::{Result, bail};
use rezwatch_core::Config;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }

    Config::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    println!("Set table_address before running `rezwatch watch`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rezwatch.toml");

        run(&path, false).unwrap();
        assert!(run(&path, false).is_err());
        assert!(run(&path, true).is_ok());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
