//! Parse model output into requirement lists and analysis results
//!
//! Model output is free-form text that may or may not be JSON. Parsing here
//! never fails outright: callers get either the structured value or a
//! signal to fall back.

use checkmate_domain::{AnalysisResult, RequirementAnalysis};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// List markers removed from the start of a line by the line-split fallback
///
/// Only these literal prefixes are recognised, and only one is removed.
pub const LIST_PREFIXES: [&str; 5] = ["- ", "* ", "1. ", "2. ", "3. "];

/// Placeholder for text fields the model left out
pub const MISSING_TEXT: &str = "N/A";

/// How a requirement-extraction response was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementParse {
    /// The response was a JSON array
    Json(Vec<String>),
    /// The response was split into lines
    Lines(Vec<String>),
}

/// Parse a requirement-extraction response
///
/// A JSON array is returned as-is, in order. Anything else, including JSON
/// that is not an array, goes through [`split_requirement_lines`].
pub fn parse_requirements(response: &str, unwrap_fences: bool) -> RequirementParse {
    let candidate = if unwrap_fences {
        unwrap_code_fence(response)
    } else {
        response
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => {
            RequirementParse::Json(items.into_iter().map(value_to_text).collect())
        }
        Ok(other) => {
            debug!("Requirement response is JSON but not an array ({})", json_kind(&other));
            RequirementParse::Lines(split_requirement_lines(response))
        }
        Err(e) => {
            debug!("Requirement response is not JSON: {}", e);
            RequirementParse::Lines(split_requirement_lines(response))
        }
    }
}

/// Split free text into requirements, one per non-empty line
///
/// Each line is trimmed, then loses at most one leading list marker from
/// [`LIST_PREFIXES`]. Lines that end up empty are dropped.
///
/// # Examples
///
/// ```
/// use checkmate_grader::parser::split_requirement_lines;
///
/// let lines = split_requirement_lines("- a\n\n  2. b  \n4. c");
/// assert_eq!(lines, vec!["a", "b", "4. c"]);
/// ```
pub fn split_requirement_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .map(strip_list_prefix)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_prefix(line: &str) -> &str {
    LIST_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .unwrap_or(line)
}

/// Parse a compliance-analysis response
///
/// Returns `None` when the response is not a JSON object. Fields are read
/// tolerantly: missing values become `0`, `false`, [`MISSING_TEXT`] or an
/// empty list, and scores are passed through without range checks.
pub fn parse_analysis(response: &str, unwrap_fences: bool) -> Option<AnalysisResult> {
    let candidate = if unwrap_fences {
        unwrap_code_fence(response)
    } else {
        response
    };

    let json: Value = match serde_json::from_str(candidate) {
        Ok(json) => json,
        Err(e) => {
            debug!("Analysis response is not JSON: {}", e);
            return None;
        }
    };

    let obj = match json.as_object() {
        Some(obj) => obj,
        None => {
            warn!("Analysis response is JSON {} instead of an object", json_kind(&json));
            return None;
        }
    };

    let mut requirements_analysis = Vec::new();
    if let Some(entries) = obj.get("requirements_analysis").and_then(Value::as_array) {
        for (idx, entry) in entries.iter().enumerate() {
            match entry.as_object() {
                Some(entry) => requirements_analysis.push(parse_entry(entry)),
                None => warn!("Skipping analysis entry {}: not a JSON object", idx),
            }
        }
    }

    Some(AnalysisResult {
        overall_score: read_score(obj.get("overall_score")),
        requirements_analysis,
        general_feedback: read_text(obj.get("general_feedback")),
        improvement_suggestions: read_list(obj.get("improvement_suggestions")),
    })
}

fn parse_entry(entry: &Map<String, Value>) -> RequirementAnalysis {
    RequirementAnalysis {
        requirement: read_text(entry.get("requirement")),
        satisfied: entry
            .get("satisfied")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        score: read_score(entry.get("score")),
        feedback: read_text(entry.get("feedback")),
        suggestions: read_list(entry.get("suggestions")),
    }
}

/// Integer score; floats are rounded, numeric strings accepted, no clamping
fn read_score(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn read_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_TEXT.to_string(),
        Some(other) => value_to_text(other.clone()),
    }
}

fn read_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().map(value_to_text).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Strings verbatim; any other JSON value as its JSON text
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract JSON from response, handling markdown code blocks
fn unwrap_code_fence(response: &str) -> &str {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Skip the opening line (``` or ```json) and the closing fence
    let body = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return trimmed,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
