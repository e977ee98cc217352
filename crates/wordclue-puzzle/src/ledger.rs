// Cross-file duplicate-secret detection
//
// Computed as a fold over (path, secret) pairs in discovery order: the
// first file to claim a secret owns it, every later claim is a duplicate
// reported against the later file.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use wordclue_core::Diagnostic;

/// Result of folding secrets over a puzzle set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretClaims {
    /// Secret -> path of the first file that declared it.
    pub first_claims: HashMap<String, PathBuf>,
    /// `(file index, diagnostic)` for every redeclared secret.
    pub duplicates: Vec<(usize, Diagnostic)>,
}

impl SecretClaims {
    /// Fold one more file into the claims. `index` is the file's position in
    /// discovery order; files without a secret are skipped.
    pub fn claim(mut self, index: usize, path: &Path, secret: Option<&str>) -> Self {
        let Some(secret) = secret else {
            return self;
        };
        let secret = secret.to_lowercase();
        match self.first_claims.get(&secret) {
            Some(first) => {
                let diagnostic = Diagnostic::DuplicateSecret {
                    secret,
                    first: first.clone(),
                };
                self.duplicates.push((index, diagnostic));
            }
            None => {
                self.first_claims.insert(secret, path.to_path_buf());
            }
        }
        self
    }
}

/// Fold `(path, secret)` pairs, in order, into [`SecretClaims`].
pub fn find_duplicate_secrets<'a, I, P>(entries: I) -> SecretClaims
where
    I: IntoIterator<Item = (P, Option<&'a str>)>,
    P: AsRef<Path>,
{
    entries
        .into_iter()
        .enumerate()
        .fold(SecretClaims::default(), |claims, (index, (path, secret))| {
            claims.claim(index, path.as_ref(), secret)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_secrets_have_no_duplicates() {
        let claims = find_duplicate_secrets([
            ("p/001.txt", Some("cat")),
            ("p/002.txt", Some("dog")),
        ]);
        assert!(claims.duplicates.is_empty());
        assert_eq!(claims.first_claims.len(), 2);
        assert_eq!(claims.first_claims["cat"], PathBuf::from("p/001.txt"));
    }

    #[test]
    fn later_file_is_blamed_and_earlier_path_cited() {
        let claims = find_duplicate_secrets([
            ("p/001.txt", Some("cat")),
            ("p/002.txt", Some("dog")),
            ("p/003.txt", Some("Cat")),
            ("p/004.txt", Some("cat")),
        ]);
        assert_eq!(claims.duplicates.len(), 2);
        let (index, diag) = &claims.duplicates[0];
        assert_eq!(*index, 2);
        assert_eq!(diag.to_string(), "Duplicate secret 'cat' (also in p/001.txt)");
        assert_eq!(claims.duplicates[1].0, 3);
        assert_eq!(claims.first_claims["cat"], PathBuf::from("p/001.txt"));
    }

    #[test]
    fn files_without_secret_are_skipped() {
        let claims = find_duplicate_secrets([("p/001.txt", None), ("p/002.txt", Some("cat"))]);
        assert!(claims.duplicates.is_empty());
        assert_eq!(claims.first_claims.len(), 1);
    }
}
