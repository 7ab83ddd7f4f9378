//! Recursive schema interpreter
//!
//! One interpreter serves both directions. `cast` reshapes wire-named
//! JSON into internal-named JSON, validating as it goes; `uncast` is the
//! structural mirror driven by the same schema tables, so a well-formed
//! value survives cast-then-uncast unchanged. Neither direction mutates
//! its input.

use super::error::{CastError, CastResult};
use super::registry::Registry;
use super::types::{AdditionalPolicy, ObjectSchema, Schema};
use serde_json::{Map, Value};

/// Casting direction through an object's property table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Wire names in, internal names out
    ToInternal,
    /// Internal names in, wire names out
    ToWire,
}

/// Validate a wire-format value and reshape it to internal key names
pub fn cast(value: &Value, schema: &Schema, registry: &Registry) -> CastResult<Value> {
    convert(value, schema, registry, "$", Direction::ToInternal)
}

/// Validate an internal-format value and reshape it back to wire key names
pub fn uncast(value: &Value, schema: &Schema, registry: &Registry) -> CastResult<Value> {
    convert(value, schema, registry, "$", Direction::ToWire)
}

fn convert(
    value: &Value,
    schema: &Schema,
    registry: &Registry,
    key: &str,
    direction: Direction,
) -> CastResult<Value> {
    match schema {
        Schema::Bool => match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(CastError::type_mismatch(key, "a boolean", type_name(other))),
        },
        Schema::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            other => Err(CastError::type_mismatch(key, "a number", type_name(other))),
        },
        Schema::String => match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(CastError::type_mismatch(key, "a string", type_name(other))),
        },
        Schema::Null => match value {
            Value::Null => Ok(Value::Null),
            other => Err(CastError::type_mismatch(key, "null", type_name(other))),
        },
        Schema::Enum(allowed) => match value {
            Value::String(s) if allowed.contains(&s.as_str()) => Ok(value.clone()),
            Value::String(s) => Err(CastError::invalid_enum_value(key, s, allowed)),
            other => Err(CastError::type_mismatch(
                key,
                "an enum literal",
                type_name(other),
            )),
        },
        Schema::Array(inner) => match value {
            Value::Array(items) => convert_items(items, inner, registry, key, direction),
            other => Err(CastError::type_mismatch(key, "an array", type_name(other))),
        },
        Schema::Seq(inner) => match (value, direction) {
            (Value::Array(items), _) => convert_items(items, inner, registry, key, direction),
            // Singleton on the wire: coerce to a one-element sequence.
            // The internal form is always an array, so this arm is never
            // taken while uncasting well-formed internal input.
            (single, Direction::ToInternal) => {
                let converted = convert(single, inner, registry, key, direction)?;
                Ok(Value::Array(vec![converted]))
            }
            (other, Direction::ToWire) => {
                Err(CastError::type_mismatch(key, "an array", type_name(other)))
            }
        },
        Schema::Union(members) => {
            for member in members {
                if let Ok(converted) = convert(value, member, registry, key, direction) {
                    return Ok(converted);
                }
            }
            Err(CastError::no_union_match(key))
        }
        Schema::Object(object) => convert_object(value, object, registry, key, direction),
        Schema::Ref(name) => {
            let resolved = registry
                .get(name)
                .ok_or_else(|| CastError::unknown_ref(name))?;
            convert(value, resolved, registry, key, direction)
        }
    }
}

fn convert_items(
    items: &[Value],
    inner: &Schema,
    registry: &Registry,
    key: &str,
    direction: Direction,
) -> CastResult<Value> {
    let converted = items
        .iter()
        .map(|item| convert(item, inner, registry, key, direction))
        .collect::<CastResult<Vec<_>>>()?;
    Ok(Value::Array(converted))
}

fn convert_object(
    value: &Value,
    object: &ObjectSchema,
    registry: &Registry,
    key: &str,
    direction: Direction,
) -> CastResult<Value> {
    let map = match value {
        Value::Object(map) => map,
        other => return Err(CastError::type_mismatch(key, "an object", type_name(other))),
    };

    let mut result = Map::with_capacity(map.len());
    for prop in &object.props {
        let (source_key, target_key) = match direction {
            Direction::ToInternal => (prop.wire, prop.internal),
            Direction::ToWire => (prop.internal, prop.wire),
        };
        match map.get(source_key) {
            Some(found) => {
                let converted = convert(found, &prop.schema, registry, source_key, direction)?;
                result.insert(target_key.to_string(), converted);
            }
            None if prop.optional => {}
            None => return Err(CastError::missing_property(key, source_key)),
        }
    }

    match object.additional {
        AdditionalPolicy::Ignore => {}
        AdditionalPolicy::Keep => {
            for (extra_key, extra_value) in map {
                if !declared(object, extra_key, direction) {
                    result.insert(extra_key.clone(), extra_value.clone());
                }
            }
        }
        AdditionalPolicy::Deny => {
            for extra_key in map.keys() {
                if !declared(object, extra_key, direction) {
                    return Err(CastError::unexpected_property(key, extra_key));
                }
            }
        }
    }

    Ok(Value::Object(result))
}

fn declared(object: &ObjectSchema, key: &str, direction: Direction) -> bool {
    object.props.iter().any(|prop| match direction {
        Direction::ToInternal => prop.wire == key,
        Direction::ToWire => prop.internal == key,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
