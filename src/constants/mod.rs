//! Constant name/value derivation from asset paths.
//!
//! The core mapping of the whole tool: an arbitrary relative asset path
//! becomes a `(NAME, value)` pair where the name is a collision-resistant,
//! language-legal identifier and the value is the (possibly rewritten) path
//! string the generated code will carry.
//!
//! # Derivation
//!
//! ```text
//! path ──value transformer──> transformed ──name transformer──> base
//!                                  │                              │
//!                                  ├── FxHash ──> _suffix         │
//!                                  │                              │
//!                        value = value_prefix + transformed       │
//!                        name  = upper(name_prefix + base + _suffix)
//! ```
//!
//! The value-transformed string is the single basis for both halves, so
//! value-side replacement rules compound into the name as well. The hash
//! suffix is taken over that same string (before name sanitization), which
//! keeps paths distinguishable even when sanitization collapses them to the
//! same base (`"a b"` and `"a/b"` both sanitize to `a_b`).

use serde::Serialize;
use thiserror::Error;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::transform::{Replacement, StringTransformer};
use crate::utils::hash;

/// Characters not allowed in generated source-code constant names.
/// `$` stays: it is legal in both Java and Kotlin identifiers.
pub const NOT_ALLOWED_NAME_CHAR_PATTERN: &str = "[^A-Za-z0-9$]";

/// Replacement for disallowed name characters, also the hash-suffix
/// separator.
pub const NAME_REPLACEMENT_CHAR: &str = "_";

// ============================================================================
// ConstNameValuePair
// ============================================================================

/// One generated constant: identifier and string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConstNameValuePair {
    pub name: String,
    pub value: String,
}

// ============================================================================
// FileConstantsFactory
// ============================================================================

/// Derives constant pairs from relative asset paths.
///
/// Pure over its configuration: the same path always yields the same pair.
pub struct FileConstantsFactory {
    value_prefix: String,
    value_transformer: StringTransformer,
    name_prefix: String,
    name_transformer: StringTransformer,
}

impl FileConstantsFactory {
    /// Factory with the default name transformer (`[^A-Za-z0-9$]` -> `_`).
    ///
    /// The default pattern is a compile-time constant, so the only fallible
    /// construction path is user-supplied rules in `value_transformer`.
    pub fn new(
        value_prefix: impl Into<String>,
        value_transformer: StringTransformer,
        name_prefix: impl Into<String>,
    ) -> Self {
        let default_rule = Replacement::compile(NOT_ALLOWED_NAME_CHAR_PATTERN, NAME_REPLACEMENT_CHAR)
            .unwrap_or_else(|_| unreachable!("default name pattern is valid"));
        Self::with_name_transformer(
            value_prefix,
            value_transformer,
            name_prefix,
            StringTransformer::new(vec![default_rule], ""),
        )
    }

    /// Factory with an explicit name transformer (the XML emitter uses a
    /// stricter character set).
    pub fn with_name_transformer(
        value_prefix: impl Into<String>,
        value_transformer: StringTransformer,
        name_prefix: impl Into<String>,
        name_transformer: StringTransformer,
    ) -> Self {
        Self {
            value_prefix: value_prefix.into(),
            value_transformer,
            name_prefix: name_prefix.into(),
            name_transformer,
        }
    }

    /// Convert a relative asset path into a constant pair.
    pub fn to_const_name_value_pair(&self, relative_path: &str) -> ConstNameValuePair {
        // Transformed path is the base for both the constant name and value.
        let transformed = self.value_transformer.apply(relative_path);

        let name = format!(
            "{}{}{}{}",
            self.name_prefix,
            self.name_transformer.apply(&transformed),
            NAME_REPLACEMENT_CHAR,
            hash::compute(&transformed),
        )
        .to_uppercase();

        let value = format!("{}{}", self.value_prefix, transformed);

        ConstNameValuePair { name, value }
    }
}

// ============================================================================
// Pair list processing
// ============================================================================

/// Two assets derived the same constant name for different values.
///
/// Left alone this would emit two identically-named fields and break the
/// generated file at its own compile time, so it is refused here instead.
#[derive(Debug, Error)]
#[error(
    "constant name `{name}` collides: derived from both `{first_value}` and `{second_value}` \
     (adjust replacement rules or prefixes so the paths stay distinguishable)"
)]
pub struct NameCollision {
    pub name: String,
    pub first_value: String,
    pub second_value: String,
}

/// Derive pairs for a full asset listing.
///
/// The orchestrator-facing entry point: maps every path through the
/// factory, then applies [`dedupe_pairs`].
pub fn derive_pairs<'a, I>(
    paths: I,
    factory: &FileConstantsFactory,
) -> Result<Vec<ConstNameValuePair>, NameCollision>
where
    I: IntoIterator<Item = &'a str>,
{
    dedupe_pairs(
        paths
            .into_iter()
            .map(|path| factory.to_const_name_value_pair(path)),
    )
}

/// Drop exact-duplicate pairs, keeping first-seen order, and refuse name
/// collisions.
///
/// Exact duplicates (same name and value) are legitimate: overlapping
/// source roots list the same file twice. Distinct values colliding on one
/// name are an error.
pub fn dedupe_pairs<I>(pairs: I) -> Result<Vec<ConstNameValuePair>, NameCollision>
where
    I: IntoIterator<Item = ConstNameValuePair>,
{
    let mut seen = FxHashSet::default();
    let mut first_value_by_name: FxHashMap<String, String> = FxHashMap::default();
    let mut out = Vec::new();

    for pair in pairs {
        if !seen.insert(pair.clone()) {
            continue;
        }
        if let Some(first_value) = first_value_by_name.get(&pair.name) {
            return Err(NameCollision {
                name: pair.name,
                first_value: first_value.clone(),
                second_value: pair.value,
            });
        }
        first_value_by_name.insert(pair.name.clone(), pair.value.clone());
        out.push(pair);
    }

    Ok(out)
}

// ============================================================================
// tests
// ============================================================================
