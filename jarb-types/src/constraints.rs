use crate::{Error, InputKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashMap;

/// `javaType` of a property holding a calendar date.
pub const DATE_TYPE: &str = "java.time.LocalDate";

/// `javaType` of a property holding a date with a time of day.
pub const DATE_TIME_TYPE: &str = "java.time.LocalDateTime";

/// The validation rule the server declares for one property of an entity.
///
/// Deserializes from the server's JSON shape:
///
/// ```json
/// {
///   "javaType": "java.lang.String",
///   "types": ["email", "text"],
///   "required": true,
///   "minimumLength": null,
///   "maximumLength": 255,
///   "fractionLength": null,
///   "radix": null,
///   "pattern": null,
///   "min": null,
///   "max": null,
///   "name": "email"
/// }
/// ```
///
/// `radix`, `pattern` and `name` are carried along but never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    #[serde(rename = "javaType", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(rename = "types", default, deserialize_with = "crate::null_as_default")]
    pub input_kinds: Vec<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub minimum_length: Option<u64>,
    #[serde(default)]
    pub maximum_length: Option<u64>,
    #[serde(rename = "fractionLength", default)]
    pub fraction_digits: Option<u64>,
    #[serde(rename = "min", default)]
    pub minimum: Option<Number>,
    #[serde(rename = "max", default)]
    pub maximum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radix: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ValidationRule {
    /// Creates an empty rule for the given `javaType`.
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: Some(source_type.into()),
            ..Default::default()
        }
    }

    pub fn with_input_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn with_length(mut self, minimum: Option<u64>, maximum: Option<u64>) -> Self {
        self.minimum_length = minimum;
        self.maximum_length = maximum;
        self
    }

    pub fn with_fraction_digits(mut self, digits: u64) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    pub fn with_bounds(mut self, minimum: Option<Number>, maximum: Option<Number>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Whether the rule describes a `LocalDate` or `LocalDateTime` property.
    ///
    /// Dates travel to the backend in a different textual format than the
    /// one their stored length is measured in, so their length bounds do not
    /// apply to the rendered string.
    pub fn is_date_like(&self) -> bool {
        matches!(
            self.source_type.as_deref(),
            Some(DATE_TYPE) | Some(DATE_TIME_TYPE)
        )
    }

    /// The most specific input widget among the rule's `types`.
    pub fn input_kind(&self) -> InputKind {
        InputKind::most_specific(&self.input_kinds)
    }
}

/// The rules for every constrained property of one entity, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityConstraints(HashMap<String, ValidationRule>);

impl EntityConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rule for a property.
    pub fn with_rule(mut self, property: impl Into<String>, rule: ValidationRule) -> Self {
        self.0.insert(property.into(), rule);
        self
    }

    pub fn rule(&self, property: &str) -> Option<&ValidationRule> {
        self.0.get(property)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ValidationRule)> for EntityConstraints {
    fn from_iter<T: IntoIterator<Item = (String, ValidationRule)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All server-declared constraints, keyed by entity name.
///
/// ```json
/// { "SuperHero": { "name": { ... }, "email": { ... } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintMap(HashMap<String, EntityConstraints>);

impl ConstraintMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the constraints of an entity.
    pub fn with_entity(mut self, entity: impl Into<String>, constraints: EntityConstraints) -> Self {
        self.0.insert(entity.into(), constraints);
        self
    }

    /// Adds a single rule, creating the entity entry when needed.
    pub fn with_rule(
        mut self,
        entity: impl Into<String>,
        property: impl Into<String>,
        rule: ValidationRule,
    ) -> Self {
        self.0
            .entry(entity.into())
            .or_default()
            .0
            .insert(property.into(), rule);
        self
    }

    pub fn entity(&self, entity: &str) -> Option<&EntityConstraints> {
        self.0.get(entity)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Looks up the rule for `entity.property`. A miss at either level is `None`.
    pub fn rule_for(&self, entity: &str, property: &str) -> Option<&ValidationRule> {
        self.entity(entity)?.rule(property)
    }

    /// Looks up the rule for a combined `"Entity.property"` key.
    ///
    /// The key is split on every `.`: the first segment names the entity and
    /// the second the property, later segments are ignored. So
    /// `"Hero.address.street"` resolves to `Hero` / `address`. A key without
    /// a `.` is rejected.
    pub fn rule_for_key(&self, key: &str) -> Result<Option<&ValidationRule>> {
        let mut parts = key.split('.');
        let entity = parts.next().unwrap_or_default();
        let property = parts.next().ok_or_else(|| {
            Error::InvalidArgument(format!(
                "validation key '{key}' does not match 'Entity.property'"
            ))
        })?;
        Ok(self.rule_for(entity, property))
    }

    /// Casts an untyped payload (e.g. a fetched response body) into a constraint map.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidPayload(e.to_string()))
    }

    /// Number of entities with constraints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, EntityConstraints)> for ConstraintMap {
    fn from_iter<T: IntoIterator<Item = (String, EntityConstraints)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
