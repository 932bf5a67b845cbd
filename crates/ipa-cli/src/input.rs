use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::CliError;

/// Resolve command input: positional words, then `--file`, then stdin.
pub fn read_input(words: &[String], file: Option<&Path>) -> Result<String, CliError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn words_are_joined() {
        let words = vec!["D@".to_string(), "'sEkrItri".to_string()];
        assert_eq!(read_input(&words, None).unwrap(), "D@ 'sEkrItri");
    }

    #[test]
    fn words_take_precedence_over_file() {
        let words = vec!["T".to_string()];
        let path = Path::new("/nonexistent/ipa-input.txt");
        assert_eq!(read_input(&words, Some(path)).unwrap(), "T");
    }

    #[test]
    fn reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "hir\nD@\n").unwrap();
        assert_eq!(read_input(&[], Some(f.path())).unwrap(), "hir\nD@\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_input(&[], Some(Path::new("/nonexistent/ipa-input.txt"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
