/// Credential resolution: turn the `token` argument into a usable bearer token.
///
/// The argument is either the token itself or the path of a file whose first
/// line is the token. A readable file wins; anything else is taken literally.
use std::fmt;
use std::fs;

use thiserror::Error;

/// Errors from credential resolution.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The token file exists but its first line is empty.
    #[error("token file '{path}' has an empty first line")]
    EmptyTokenFile {
        /// Path of the offending file.
        path: String,
    },

    /// The literal token argument is empty.
    #[error("token argument is empty")]
    EmptyToken,
}

/// A resolved bearer token.
///
/// Held in memory for one run. The `Debug` impl redacts the value so the
/// token cannot leak through log or error formatting.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// The raw token, for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Resolve the `token` CLI argument into a [`Credential`].
///
/// If `input` names a readable file, the credential is the file's first line
/// with trailing whitespace stripped. Otherwise `input` itself is the token.
///
/// # Errors
///
/// Returns `CredentialError` when the resolved token is empty.
pub fn resolve(input: &str) -> Result<Credential, CredentialError> {
    match fs::read_to_string(input) {
        Ok(contents) => {
            let token = contents.lines().next().unwrap_or("").trim_end();
            if token.is_empty() {
                return Err(CredentialError::EmptyTokenFile {
                    path: input.to_owned(),
                });
            }
            Ok(Credential(token.to_owned()))
        }
        Err(_) => {
            if input.is_empty() {
                return Err(CredentialError::EmptyToken);
            }
            Ok(Credential(input.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_literal_token() {
        let cred = resolve("not-a-file-just-a-token").unwrap();
        assert_eq!(cred.as_str(), "not-a-file-just-a-token");
    }

    #[test]
    fn test_empty_literal_token() {
        let result = resolve("");
        assert!(matches!(result, Err(CredentialError::EmptyToken)));
    }

    #[test]
    fn test_token_from_file_first_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("token.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "secret-token").unwrap();
        writeln!(f, "trailing junk that must be ignored").unwrap();

        let cred = resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(cred.as_str(), "secret-token");
    }

    #[test]
    fn test_token_from_file_strips_trailing_whitespace() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("token.txt");
        std::fs::write(&path, "secret-token  \n").unwrap();

        let cred = resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(cred.as_str(), "secret-token");
    }

    #[test]
    fn test_empty_token_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("token.txt");
        std::fs::write(&path, "\n").unwrap();

        let result = resolve(path.to_str().unwrap());
        assert!(matches!(result, Err(CredentialError::EmptyTokenFile { .. })));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cred = resolve("super-secret").unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
