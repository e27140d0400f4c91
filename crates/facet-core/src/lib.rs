//! Name algebra for dimensional variant-file resolution.
//!
//! A project declares an ordered list of *dimensions*, each an ordered
//! set of mutually exclusive variant tokens (e.g. environment ∈
//! `{dev, prod, test}`, platform ∈ `{android, ios}`). File and
//! directory names may carry such tokens as extra `-`-separated
//! segments (`config-prod-ios.json` derives from `config.json`).
//!
//! This crate is pure: it splits names into tokens, classifies tokens
//! against the declared dimensions, tests whether one name derives from
//! another, and scores matched tokens so earlier-declared dimensions
//! strictly outrank later ones. The filesystem-facing resolution lives
//! in `facet-resolve`.

pub use self::dim::{DimensionError, Dimensions};
pub use self::score::{perfect_match, score};
pub use self::token::tokenize;

mod dim;
mod score;
mod token;
