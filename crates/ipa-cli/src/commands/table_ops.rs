use std::fs;
use std::path::Path;

use ipa_core::{parse_inventory_toml, Inventory};

use crate::CliError;

/// The built-in inventory as TOML, ready to edit and pass back via `--table`.
pub fn export_default() -> Result<String, CliError> {
    Ok(Inventory::kirshenbaum().to_toml()?)
}

pub fn validate_file(path: &Path) -> Result<Inventory, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_inventory_toml(&content)?)
}

/// Install a custom inventory for the rest of the process.
pub fn load_custom(path: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(path)?;
    ipa_core::Tables::init_custom(content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn exported_table_validates() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(export_default().unwrap().as_bytes()).unwrap();
        let inv = validate_file(f.path()).unwrap();
        assert_eq!(inv, Inventory::kirshenbaum());
    }

    #[test]
    fn invalid_file_reports_table_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"segments = []\nvowels = []\ndiacritics = []\nstress = []\n[nasal]\nmark = \"~\"\nvowel = \"a\"\nconsonant = \"b\"\n")
            .unwrap();
        let err = validate_file(f.path()).unwrap_err();
        assert!(matches!(err, CliError::Table(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = validate_file(Path::new("/nonexistent/table.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
