//! Additive-only merging of ENUM column definitions.
//!
//! Removing a value from an ENUM fails (or silently rewrites data) for rows
//! still holding it, so a changed ENUM is migrated to the union of the old
//! and new value lists. Values only ever get appended.

use crate::error::{DiffError, Result};

/// Returns `true` if the definition is an ENUM type (case-insensitive).
#[must_use]
pub fn is_enum(definition: &str) -> bool {
    definition
        .trim_start()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("enum"))
}

/// An ENUM definition split into its quoted values and trailing modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition<'a> {
    /// Quoted literals between the parentheses, in order, without quotes.
    pub values: Vec<&'a str>,
    /// Everything after the closing parenthesis, e.g. ` NOT NULL DEFAULT 'a'`.
    pub modifiers: &'a str,
}

impl<'a> EnumDefinition<'a> {
    /// Parses `ENUM('a','b') <modifiers>`.
    ///
    /// Returns `None` unless the definition holds exactly one `(` followed
    /// by exactly one `)`.
    #[must_use]
    pub fn parse(definition: &'a str) -> Option<Self> {
        if definition.matches('(').count() != 1 || definition.matches(')').count() != 1 {
            return None;
        }
        let (_, after_open) = definition.split_once('(')?;
        let (list, modifiers) = after_open.split_once(')')?;
        let values = list.split('\'').skip(1).step_by(2).collect();
        Some(Self { values, modifiers })
    }

    fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// The result of merging two ENUM definitions that differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMerge<'a> {
    /// Old values in old order, then values new to the list in new order.
    pub values: Vec<&'a str>,
    /// Modifiers of the new definition, untrimmed.
    pub modifiers: &'a str,
}

impl EnumMerge<'_> {
    /// Renders the value list as `'a','b','c'`.
    #[must_use]
    pub fn value_list(&self) -> String {
        self.values
            .iter()
            .map(|v| format!("'{v}'"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Merges two ENUM definitions of `table.column`.
///
/// Returns `Ok(None)` when the new definition adds no value and its
/// modifiers match the old ones ignoring case and surrounding whitespace.
/// Values missing from the new definition are never dropped.
///
/// # Errors
///
/// Returns [`DiffError::EnumParse`] if either side does not contain exactly
/// one parenthesised value list.
pub fn merge_enum<'a>(
    table: &str,
    column: &str,
    old: &'a str,
    new: &'a str,
) -> Result<Option<EnumMerge<'a>>> {
    let parse = |definition: &'a str| {
        EnumDefinition::parse(definition).ok_or_else(|| DiffError::EnumParse {
            table: table.to_string(),
            column: column.to_string(),
            definition: definition.to_string(),
        })
    };
    let old_enum = parse(old)?;
    let new_enum = parse(new)?;

    let has_new_values = new_enum.values.iter().any(|v| !old_enum.contains(v));
    let same_modifiers =
        old_enum.modifiers.trim().to_lowercase() == new_enum.modifiers.trim().to_lowercase();
    if !has_new_values && same_modifiers {
        return Ok(None);
    }

    let mut values: Vec<&str> = Vec::with_capacity(old_enum.values.len() + new_enum.values.len());
    for value in old_enum.values.into_iter().chain(new_enum.values) {
        if !values.contains(&value) {
            values.push(value);
        }
    }

    Ok(Some(EnumMerge {
        values,
        modifiers: new_enum.modifiers,
    }))
}
