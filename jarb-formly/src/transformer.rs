use jarb_regex::{NumberPattern, PatternResult};
use jarb_store::ConstraintsStore;
use jarb_types::{ConstraintMap, EntityContext, FieldDescriptor, InputKind, ValidationRule};
use serde_json::{Number, Value};
use tracing::{debug, warn};

/// Maps form fields to fields annotated with the store's constraints.
#[derive(Debug, Clone)]
pub struct FieldTransformer {
    store: ConstraintsStore,
}

impl FieldTransformer {
    pub fn new(store: ConstraintsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConstraintsStore {
        &self.store
    }

    /// Annotates `fields` with the rules of the entity named in `options`.
    ///
    /// Returns the fields in their original order. When `options` names no
    /// entity the fields come back unchanged. All fields see the same
    /// constraints snapshot. `model` is accepted for signature parity with the
    /// renderer's field transforms and is not read.
    pub fn transform(
        &self,
        mut fields: Vec<FieldDescriptor>,
        _model: &Value,
        options: &EntityContext,
    ) -> Vec<FieldDescriptor> {
        self.transform_in_place(&mut fields, options);
        fields
    }

    /// Same as [`transform`](Self::transform), mutating the fields where they are.
    pub fn transform_in_place(&self, fields: &mut [FieldDescriptor], options: &EntityContext) {
        let Some(entity_name) = options.entity_name() else {
            return;
        };

        let constraints = self.store.get_constraints();
        for field in fields.iter_mut() {
            annotate_field(field, constraints.as_deref(), entity_name);
        }
    }
}

/// Looks up and applies the rule for `entity_name.field.key`, honouring the
/// field's opt-out flag. A lookup miss leaves the field unchanged.
///
/// The combined key is resolved by [`ConstraintMap::rule_for_key`], so a
/// nested key such as `address.street` matches the `address` rule.
pub(crate) fn annotate_field(
    field: &mut FieldDescriptor,
    constraints: Option<&ConstraintMap>,
    entity_name: &str,
) {
    if field.ignores_constraints() {
        return;
    }
    let Some(constraints) = constraints else {
        return;
    };

    let key = format!("{entity_name}.{}", field.key);
    let rule = match constraints.rule_for_key(&key) {
        Ok(Some(rule)) => rule,
        Ok(None) => return,
        Err(e) => {
            warn!("Skipping constraints for field {}: {}", field.key, e);
            return;
        }
    };

    debug!("Applying constraints {} to field", key);
    apply_rule(field, rule);
}

/// Writes the presentation options `rule` implies into `field`.
///
/// Options are only added or overwritten, never removed.
pub fn apply_rule(field: &mut FieldDescriptor, rule: &ValidationRule) {
    if rule.required == Some(true) {
        field.set_template_option("required", true);
    }

    if let Some(minimum) = rule.minimum_length.filter(|n| *n != 0) {
        field.set_template_option("minlength", minimum);
    }

    // Dates are sent to the backend in another format than they are stored in.
    if let Some(maximum) = rule.maximum_length.filter(|n| *n != 0 && !rule.is_date_like()) {
        field.set_template_option("maxlength", maximum);
    }

    if let Some(minimum) = rule.minimum.as_ref().filter(|n| is_non_zero(n)) {
        field.set_template_option("min", Value::Number(minimum.clone()));
    }

    if let Some(maximum) = rule.maximum.as_ref().filter(|n| is_non_zero(n)) {
        field.set_template_option("max", Value::Number(maximum.clone()));
    }

    if rule.input_kind() == InputKind::Number {
        match number_pattern(rule) {
            Ok(pattern) => field.set_template_option("pattern", pattern.as_pattern_string()),
            Err(e) => warn!("Skipping pattern for field {}: {}", field.key, e),
        }
    }
}

fn number_pattern(rule: &ValidationRule) -> PatternResult<NumberPattern> {
    match rule.fraction_digits {
        Some(digits) if digits > 0 => NumberPattern::fraction(digits),
        _ => Ok(NumberPattern::whole()),
    }
}

fn is_non_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|v| v != 0.0)
}
