use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{DriftError, DriftResult},
    pattern::kind::{GeometryFamilyKind, ShapeConstants},
    variant::config::{PatternParams, VariantName},
};

/// Variant lookup table: the built-in parameters plus validated overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantTable {
    pub(crate) overrides: BTreeMap<VariantName, PatternParams>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    variants: BTreeMap<VariantName, serde_json::Value>,
}

impl VariantTable {
    /// The compiled-in table with no overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse overrides from JSON of the form `{"variants": {"<name>": {...}}}`.
    ///
    /// Each entry is merged field-by-field onto the built-in parameters of the same name,
    /// so an override only needs the fields it changes. Switching `family.kind` without
    /// giving `family.shape` starts from the new kind's default shape constants.
    pub fn from_json_str(s: &str) -> DriftResult<Self> {
        let file: TableFile =
            serde_json::from_str(s).map_err(|e| DriftError::serde(e.to_string()))?;

        let mut table = Self::default();
        for (name, patch) in file.variants {
            let mut merged = serde_json::to_value(PatternParams::builtin(name))
                .map_err(|e| DriftError::serde(e.to_string()))?;
            reseed_shape(&mut merged, &patch);
            merge_json(&mut merged, patch);
            let params: PatternParams = serde_json::from_value(merged)
                .map_err(|e| DriftError::serde(format!("variant '{name}': {e}")))?;
            table = table.with_override(name, params)?;
        }
        tracing::debug!(overrides = table.overrides.len(), "loaded variant table");
        Ok(table)
    }

    /// Read and parse an override file.
    pub fn from_json_path(path: &Path) -> DriftResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read variant table '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Replace the parameters of `name` after validating them.
    pub fn with_override(mut self, name: VariantName, params: PatternParams) -> DriftResult<Self> {
        params.validate().map_err(|e| match e {
            DriftError::InvalidParameter(msg) => {
                DriftError::invalid_parameter(format!("variant '{name}': {msg}"))
            }
            other => other,
        })?;
        self.overrides.insert(name, params);
        Ok(self)
    }

    /// Parameters for a known variant.
    pub fn get(&self, name: VariantName) -> PatternParams {
        self.overrides
            .get(&name)
            .cloned()
            .unwrap_or_else(|| PatternParams::builtin(name))
    }

    /// Parameters for a section name; unknown names resolve to hero.
    pub fn resolve(&self, variant_name: &str) -> PatternParams {
        self.get(VariantName::resolve(variant_name))
    }

    /// Whether `name` carries an override.
    pub fn is_overridden(&self, name: VariantName) -> bool {
        self.overrides.contains_key(&name)
    }
}

/// Replace the built-in shape with the defaults of a patched kind, unless the patch sets one.
fn reseed_shape(base: &mut serde_json::Value, patch: &serde_json::Value) {
    let Some(family) = patch.get("family") else {
        return;
    };
    if family.get("shape").is_some() {
        return;
    }
    let Some(kind) = family
        .get("kind")
        .and_then(|k| serde_json::from_value::<GeometryFamilyKind>(k.clone()).ok())
    else {
        return;
    };
    if let (Some(slot), Ok(shape)) = (
        base.pointer_mut("/family/shape"),
        serde_json::to_value(ShapeConstants::for_kind(kind)),
    ) {
        *slot = shape;
    }
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (k, v) in patch {
                match base.get_mut(&k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        base.insert(k, v);
                    }
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variant/table.rs"]
mod tests;
