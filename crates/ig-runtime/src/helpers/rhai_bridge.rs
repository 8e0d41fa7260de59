use std::collections::BTreeMap;

use ig_core::{ImGuardError, UiValue};
use rhai::{Array, Dynamic, EvalAltResult, ImmutableString, Map, Position, FLOAT, INT};

pub(crate) fn uivalue_to_dynamic(value: &UiValue) -> Dynamic {
    match value {
        UiValue::Unit => Dynamic::UNIT,
        UiValue::Bool(value) => Dynamic::from_bool(*value),
        UiValue::Int(value) => Dynamic::from_int(*value as INT),
        UiValue::Float(value) => Dynamic::from_float(*value as FLOAT),
        UiValue::String(value) => Dynamic::from(value.clone()),
        UiValue::Array(values) => {
            let array = values.iter().map(uivalue_to_dynamic).collect::<Array>();
            Dynamic::from_array(array)
        }
        UiValue::Map(values) => {
            let mut map = Map::new();
            for (key, value) in values {
                map.insert(key.clone().into(), uivalue_to_dynamic(value));
            }
            Dynamic::from_map(map)
        }
    }
}

pub(crate) fn dynamic_to_uivalue(value: Dynamic) -> Result<UiValue, ImGuardError> {
    if value.is_unit() {
        return Ok(UiValue::Unit);
    }
    if value.is::<bool>() {
        return Ok(UiValue::Bool(value.cast::<bool>()));
    }
    if value.is::<INT>() {
        return Ok(UiValue::Int(value.cast::<INT>() as i64));
    }
    if value.is::<FLOAT>() {
        return Ok(UiValue::Float(value.cast::<FLOAT>() as f64));
    }
    if value.is::<ImmutableString>() {
        return Ok(UiValue::String(value.cast::<ImmutableString>().to_string()));
    }
    if value.is::<char>() {
        return Ok(UiValue::String(value.cast::<char>().to_string()));
    }
    if value.is::<Array>() {
        let array = value.cast::<Array>();
        let mut out = Vec::with_capacity(array.len());
        for item in array {
            out.push(dynamic_to_uivalue(item)?);
        }
        return Ok(UiValue::Array(out));
    }
    if value.is::<Map>() {
        let map = value.cast::<Map>();
        let mut out = BTreeMap::new();
        for (key, value) in map {
            out.insert(key.to_string(), dynamic_to_uivalue(value)?);
        }
        return Ok(UiValue::Map(out));
    }

    Err(ImGuardError::new(
        "RUNTIME_VALUE_UNSUPPORTED",
        format!("Unsupported Rhai value type \"{}\".", value.type_name()),
    ))
}

pub(crate) fn dynamic_args_to_uivalues(args: Vec<Dynamic>) -> Result<Vec<UiValue>, ImGuardError> {
    args.into_iter().map(dynamic_to_uivalue).collect()
}

/// Raises `error` inside the running script. The message keeps the error code
/// so hosts can tell scope errors from ordinary script failures.
pub(crate) fn script_error(error: ImGuardError) -> Box<EvalAltResult> {
    Box::new(EvalAltResult::ErrorRuntime(
        Dynamic::from(error.to_string()),
        Position::NONE,
    ))
}
