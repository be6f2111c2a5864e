//! Canned call synthesis from function and tool descriptors
//!
//! The mock never executes anything: it walks the first descriptor's required
//! parameters and fills in a fixed value per declared type, producing a call
//! payload that is deterministic for a given descriptor.

use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::core::models::openai::{Function, FunctionCall, Tool, ToolCall};
use crate::utils::error::{InvokeError, Result};

/// Placeholder for required string parameters without an enum
pub(crate) const CANNED_STRING: &str = "kawaii";
/// Placeholder for required integer parameters
pub(crate) const CANNED_INTEGER: i64 = 114514;
/// Placeholder for required number parameters
pub(crate) const CANNED_NUMBER: f64 = 1919810.0;

/// Typed view of a JSON-schema-like parameter block
///
/// Only `object` schemas are synthesizable. A `parameters` value that does
/// not fit this shape is a test-fixture bug and is rejected loudly.
#[derive(Debug, Deserialize)]
struct ParameterSchema {
    #[serde(rename = "type")]
    schema_type: String,
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    required: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PropertySchema {
    #[serde(rename = "type")]
    property_type: String,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<String>>,
}

/// Synthesize a function call from the first function descriptor, if any
///
/// Returns `Ok(None)` when there is nothing to synthesize: no descriptors, no
/// parameter schema, or a schema whose top-level type is not `object`.
pub(crate) fn generate_function_call(functions: &[Function]) -> Result<Option<FunctionCall>> {
    let Some(function) = functions.first() else {
        return Ok(None);
    };

    let Some(parameters) = &function.parameters else {
        return Ok(None);
    };

    let schema: ParameterSchema = serde_json::from_value(parameters.clone()).map_err(|e| {
        InvokeError::InvalidRequest(format!(
            "malformed parameter schema for function '{}': {e}",
            function.name
        ))
    })?;

    if schema.schema_type != "object" {
        return Ok(None);
    }

    let mut arguments = Map::new();
    for (name, property) in &schema.properties {
        if !schema.required.contains(name) {
            continue;
        }

        let property: PropertySchema = serde_json::from_value(property.clone()).map_err(|e| {
            InvokeError::InvalidRequest(format!(
                "malformed property '{name}' for function '{}': {e}",
                function.name
            ))
        })?;

        let value = match property.property_type.as_str() {
            "string" => match property.enum_values {
                Some(values) => match values.into_iter().next() {
                    Some(first) => Value::String(first),
                    None => continue,
                },
                None => Value::String(CANNED_STRING.to_string()),
            },
            "integer" => Value::from(CANNED_INTEGER),
            "number" => Value::from(CANNED_NUMBER),
            "boolean" => Value::Bool(true),
            _ => continue,
        };
        arguments.insert(name.clone(), value);
    }

    Ok(Some(FunctionCall {
        name: function.name.clone(),
        arguments: serde_json::to_string(&arguments)?,
    }))
}

/// Synthesize tool calls from the first tool descriptor, if any
///
/// The wrapped function goes through the same per-parameter synthesis; the
/// result carries a generated call identifier and the `function` type tag.
pub(crate) fn generate_tool_calls(tools: &[Tool]) -> Result<Option<Vec<ToolCall>>> {
    let Some(tool) = tools.first() else {
        return Ok(None);
    };

    if tool.tool_type != "function" {
        return Ok(None);
    }

    let Some(function_call) = generate_function_call(std::slice::from_ref(&tool.function))? else {
        return Ok(None);
    };

    Ok(Some(vec![ToolCall {
        id: format!("call_{}", Uuid::new_v4().simple()),
        tool_type: "function".to_string(),
        function: function_call,
    }]))
}
