//! Dimension declarations and name classification.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::token::tokenize;

#[derive(Debug, Error)]
pub enum DimensionError {
    #[error("token `{token}` declared in both dimension {first} and dimension {second}")]
    Ambiguous {
        token: String,
        first: usize,
        second: usize,
    },
}

/// Ordered list of dimensions, each an ordered set of mutually
/// exclusive variant tokens.
///
/// Declaration order is significant: tokens from earlier dimensions
/// always outscore any combination of tokens from later ones (see
/// [`crate::score`]). A token may belong to at most one dimension;
/// construction rejects duplicates so scoring stays well-defined.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>")]
pub struct Dimensions {
    dims: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl TryFrom<Vec<Vec<String>>> for Dimensions {
    type Error = DimensionError;

    fn try_from(dims: Vec<Vec<String>>) -> Result<Self, DimensionError> {
        Self::new(dims)
    }
}

impl Dimensions {
    pub fn new(dims: Vec<Vec<String>>) -> Result<Self, DimensionError> {
        let mut index = HashMap::new();

        for (i, dim) in dims.iter().enumerate() {
            for token in dim {
                if let Some(&first) = index.get(token.as_str()) {
                    // a second hit within the same dimension is a plain
                    // duplicate, equally ill-defined for scoring
                    return Err(DimensionError::Ambiguous {
                        token: token.clone(),
                        first,
                        second: i,
                    });
                }
                index.insert(token.clone(), i);
            }
        }

        Ok(Self { dims, index })
    }

    /// Number of declared dimensions.
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Declaration index of the dimension containing `token`.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Intersect caller-supplied flags with the declared vocabulary,
    /// producing the active selector set for one resolution pass.
    /// Unknown flags are silently ignored.
    pub fn selectors_from<I, S>(&self, flags: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        flags
            .into_iter()
            .filter(|f| self.contains(f.as_ref()))
            .map(|f| f.as_ref().to_string())
            .collect()
    }

    /// Dimensional tokens of `name`: tokenize, drop the leading root
    /// segment (the first token can never be a variant token) and, for
    /// files, the trailing extension token, then keep what belongs to
    /// some dimension.
    pub fn filtered_tokens(&self, name: &str, is_file: bool) -> Vec<String> {
        let mut tokens = tokenize(name);

        if !tokens.is_empty() {
            tokens.remove(0);
        }
        if is_file {
            tokens.pop();
        }

        tokens.retain(|t| self.contains(t));
        tokens
    }

    /// Tokens forming the logical root identity of `name`: everything
    /// [`Self::filtered_tokens`] did not claim, in original order.
    pub fn base_tokens(&self, name: &str, is_file: bool) -> Vec<String> {
        let filtered = self.filtered_tokens(name, is_file);

        tokenize(name)
            .into_iter()
            .filter(|t| !filtered.contains(t))
            .collect()
    }

    /// Whether `name` (file mode) carries at least one dimensional token.
    pub fn is_derivation(&self, name: &str) -> bool {
        !self.filtered_tokens(name, true).is_empty()
    }

    /// Root file name of `name`: base tokens rejoined with `-`, the
    /// final separator rewritten back to `.` to restore the `name.ext`
    /// shape. `config-prod-ios.json` → `config.json`.
    pub fn root_file_name(&self, name: &str) -> String {
        let mut joined = self.base_tokens(name, true).join("-");

        if let Some(idx) = joined.rfind('-') {
            joined.replace_range(idx..=idx, ".");
        }
        joined
    }

    /// Root name of a directory: base tokens rejoined with `-`, no
    /// extension handling. `assets-ios` → `assets`.
    pub fn root_dir_name(&self, name: &str) -> String {
        self.base_tokens(name, false).join("-")
    }

    /// Dimensional tokens by which `name` derives from `base`.
    ///
    /// Returns `Some` iff stripping the dimensional tokens from `name`
    /// leaves exactly the root token sequence of `base`, and at least
    /// one dimensional token was stripped. Any extra unrecognized
    /// segment disqualifies the name outright: `test-android-backup.js`
    /// is not a derivation of `test.js` under `[["android", "ios"]]`,
    /// because `backup` belongs to no dimension.
    pub fn derived_tokens(&self, name: &str, base: &str, is_file: bool) -> Option<Vec<String>> {
        let filtered = self.filtered_tokens(name, is_file);
        if filtered.is_empty() {
            return None;
        }

        let rest: Vec<String> = tokenize(name)
            .into_iter()
            .filter(|t| !filtered.contains(t))
            .collect();

        if rest == self.base_tokens(base, is_file) {
            Some(filtered)
        } else {
            None
        }
    }
}
