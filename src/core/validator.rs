//! Validation engine: checks a raw field mapping against a [`Schema`].

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::error::{FieldError, ValidationError};
use super::rules::{self, Coercion};
use super::schema::{FieldKind, FieldRule, Schema};
use super::value::{Fields, Value};

pub const REQUIRED_FIELD: &str = "required field";
pub const UNKNOWN_FIELD: &str = "unknown field";
pub const NULL_NOT_ALLOWED: &str = "null value not allowed";
pub const INVALID_DATE: &str = "Date should be in %Y-%m-%d format";

/// Validate `raw` against `schema`.
///
/// Null and empty values are stripped first, so a missing required field
/// reports "required field" and an absent optional field is skipped. Every
/// field is checked before returning; on success the result holds only the
/// fields that were present, with coercions applied.
pub fn validate(schema: &Schema, raw: Fields) -> Result<Fields, ValidationError> {
    let mut input: Fields = raw.into_iter().filter(|(_, v)| !v.is_absent()).collect();
    let mut errors = ValidationError::new();
    let mut output = Fields::with_capacity(input.len());

    for (name, rule) in schema.fields() {
        match input.shift_remove(name) {
            None if rule.required => errors.push(name, REQUIRED_FIELD),
            None => {}
            Some(value) => match check_field(rule, value) {
                Ok(value) => {
                    output.insert(name.to_string(), value);
                }
                Err(field_errors) => errors.extend_field(name, field_errors),
            },
        }
    }

    for (name, _) in input {
        errors.push(name, UNKNOWN_FIELD);
    }

    if errors.is_empty() {
        trace!(schema = schema.name(), fields = output.len(), "validated");
        Ok(output)
    } else {
        debug!(schema = schema.name(), failed = errors.len(), "validation failed");
        Err(errors)
    }
}

/// Check one present value. Type errors stop further checks on the field;
/// the remaining constraints are independent and all reported.
fn check_field(rule: &FieldRule, value: Value) -> Result<Value, Vec<FieldError>> {
    let type_error = || vec![FieldError::from(format!("must be of {} type", rule.kind.type_name()))];

    match (&rule.kind, value) {
        (FieldKind::String, Value::Str(s)) => check_string(rule, s).map(Value::Str),
        (FieldKind::Date, Value::Str(s)) => {
            let s = check_string(rule, s)?;
            if rules::is_date_string(&s) {
                Ok(Value::Str(s))
            } else {
                Err(vec![INVALID_DATE.into()])
            }
        }
        (FieldKind::Date, Value::Date(d)) => rules::format_date(d)
            .map(Value::Str)
            .ok_or_else(|| vec![INVALID_DATE.into()]),
        (FieldKind::Integer, Value::Int(i)) => Ok(Value::Int(i)),
        (FieldKind::Decimal, Value::Decimal(d)) => match rule.decimal_places {
            Some(places) => rules::apply_decimal_places(d, places)
                .map(Value::Decimal)
                .map_err(|m| vec![m.into()]),
            None => Ok(Value::Decimal(d)),
        },
        (FieldKind::Boolean, Value::Bool(b)) => Ok(match rule.coerce {
            Some(Coercion::YesNo) => Value::Str(rules::yes_no(b).to_string()),
            None => Value::Bool(b),
        }),
        (FieldKind::Node(node_type), Value::Node(node)) => {
            if node_type.accepts(node.kind()) {
                Ok(Value::Node(node))
            } else {
                Err(type_error())
            }
        }
        (FieldKind::List(item_rule), Value::List(items)) => check_list(item_rule, items),
        _ => Err(type_error()),
    }
}

fn check_string(rule: &FieldRule, s: String) -> Result<String, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();
    let len = s.chars().count();

    if let Some(min) = rule.min_length {
        if len < min {
            errors.push(format!("min length is {min}").into());
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            errors.push(format!("max length is {max}").into());
        }
    }
    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(&s) {
            errors.push(format!("value does not match regex '{}'", pattern.source()).into());
        }
    }
    if let Some(allowed) = rule.allowed {
        if !allowed.contains(&s.as_str()) {
            errors.push(format!("unallowed value {s}").into());
        }
    }

    if errors.is_empty() { Ok(s) } else { Err(errors) }
}

/// Each element is checked on its own; failures are keyed by index.
fn check_list(item_rule: &FieldRule, items: Vec<Value>) -> Result<Value, Vec<FieldError>> {
    let mut failures: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut checked = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        if matches!(item, Value::Null) {
            failures.insert(index, vec![NULL_NOT_ALLOWED.to_string()]);
            continue;
        }
        match check_field(item_rule, item) {
            Ok(value) => checked.push(value),
            Err(errs) => {
                let messages = errs
                    .into_iter()
                    .filter_map(|e| e.message().map(str::to_string))
                    .collect();
                failures.insert(index, messages);
            }
        }
    }

    if failures.is_empty() {
        Ok(Value::List(checked))
    } else {
        Err(vec![FieldError::Items(failures)])
    }
}
