//! Structural checks on a node's argument list.
//!
//! Catches ambiguous schemas at registration time: empty names, parameters
//! that normalize to the same name, and synonyms claimed by two arguments.

use std::collections::HashMap;

use crate::error::{Result, SchemaError};
use crate::types::ArgumentSpec;

/// Validates the arguments of one node, built-in help flag included.
///
/// # Examples
///
/// ```
/// use argent_core::{validate_arguments, ArgumentSpec, Param, SchemaError};
///
/// let a = ArgumentSpec::from_param(&Param::new("__a"), true).with_synonyms(["--x"]);
/// let b = ArgumentSpec::from_param(&Param::new("__b"), true).with_synonyms(["--x"]);
/// assert!(validate_arguments(&[a.clone()]).is_ok());
///
/// let err = validate_arguments(&[a, b]).unwrap_err();
/// assert!(matches!(err, SchemaError::SynonymConflict { .. }));
/// ```
pub fn validate_arguments(arguments: &[ArgumentSpec]) -> Result<()> {
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for arg in arguments {
        validate_name(&arg.canonical_name)?;

        if owners.values().any(|owner| *owner == arg.canonical_name) {
            return Err(SchemaError::DuplicateParameter(arg.canonical_name.clone()));
        }

        for synonym in &arg.synonyms {
            if let Some(first) = owners.insert(synonym, &arg.canonical_name) {
                return Err(SchemaError::SynonymConflict {
                    synonym: synonym.clone(),
                    first: first.to_string(),
                    second: arg.canonical_name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Rejects names that are empty once separators are stripped.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().trim_matches(['-', '_']).is_empty() {
        return Err(SchemaError::EmptyName(name.to_string()));
    }
    Ok(())
}
