//! Execution outcome model.
//!
//! Wire format matches the manual snapshot file: the return code is either a
//! plain integer or the literal `"nok"` sentinel for a command that did not
//! complete.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed output literal recorded for timed-out commands.
pub const TIMEOUT_OUTPUT: &str = "TIMEOUT";

/// Classified outcome of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecStatus {
    Success,
    Failed,
    Timeout,
}

/// Exit status of one invocation: a real exit code, or the sentinel for a
/// process that did not run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Exit(i32),
    Incomplete,
}

const INCOMPLETE_SENTINEL: &str = "nok";

impl Serialize for ReturnCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReturnCode::Exit(code) => serializer.serialize_i32(*code),
            ReturnCode::Incomplete => serializer.serialize_str(INCOMPLETE_SENTINEL),
        }
    }
}

struct ReturnCodeVisitor;

impl Visitor<'_> for ReturnCodeVisitor {
    type Value = ReturnCode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer exit code or the string \"{INCOMPLETE_SENTINEL}\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ReturnCode, E> {
        i32::try_from(v)
            .map(ReturnCode::Exit)
            .map_err(|_| E::custom(format!("exit code out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ReturnCode, E> {
        i32::try_from(v)
            .map(ReturnCode::Exit)
            .map_err(|_| E::custom(format!("exit code out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ReturnCode, E> {
        if v == INCOMPLETE_SENTINEL {
            Ok(ReturnCode::Incomplete)
        } else {
            Err(E::custom(format!("unknown return code sentinel: {v:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for ReturnCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ReturnCodeVisitor)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnCode::Exit(code) => write!(f, "{code}"),
            ReturnCode::Incomplete => f.write_str(INCOMPLETE_SENTINEL),
        }
    }
}

/// Outcome of one command invocation. Created per invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub returncode: ReturnCode,
    pub output: String,
    pub status: ExecStatus,
}

impl ExecutionResult {
    /// Zero exit.
    pub fn success(output: String) -> Self {
        Self {
            returncode: ReturnCode::Exit(0),
            output,
            status: ExecStatus::Success,
        }
    }

    /// Non-zero exit, or a process that could not be started/awaited.
    pub fn failed(code: i32, output: String) -> Self {
        Self {
            returncode: ReturnCode::Exit(code),
            output,
            status: ExecStatus::Failed,
        }
    }

    /// Deadline expiry.
    pub fn timeout() -> Self {
        Self {
            returncode: ReturnCode::Incomplete,
            output: TIMEOUT_OUTPUT.to_string(),
            status: ExecStatus::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_return_code_serializes_as_int_or_sentinel() {
        assert_eq!(serde_json::to_string(&ReturnCode::Exit(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&ReturnCode::Incomplete).unwrap(),
            "\"nok\""
        );
    }

    #[test]
    fn test_return_code_deserializes_both_forms() {
        assert_eq!(
            serde_json::from_str::<ReturnCode>("0").unwrap(),
            ReturnCode::Exit(0)
        );
        assert_eq!(
            serde_json::from_str::<ReturnCode>("-1").unwrap(),
            ReturnCode::Exit(-1)
        );
        assert_eq!(
            serde_json::from_str::<ReturnCode>("\"nok\"").unwrap(),
            ReturnCode::Incomplete
        );
    }

    #[test]
    fn test_return_code_rejects_unknown_sentinel() {
        assert!(serde_json::from_str::<ReturnCode>("\"ok\"").is_err());
        assert!(serde_json::from_str::<ReturnCode>("1.5").is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExecStatus::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(
            serde_json::from_str::<ExecStatus>("\"success\"").unwrap(),
            ExecStatus::Success
        );
    }

    #[test]
    fn test_timeout_constructor_is_fixed_literal() {
        let result = ExecutionResult::timeout();
        assert_eq!(result.returncode, ReturnCode::Incomplete);
        assert_eq!(result.output, "TIMEOUT");
        assert_eq!(result.status, ExecStatus::Timeout);
    }

    #[test]
    fn test_success_and_failed_constructors() {
        let ok = ExecutionResult::success("usage: dslist".to_string());
        assert_eq!(ok.returncode, ReturnCode::Exit(0));
        assert_eq!(ok.status, ExecStatus::Success);

        let bad = ExecutionResult::failed(2, "bad flag".to_string());
        assert_eq!(bad.returncode, ReturnCode::Exit(2));
        assert_eq!(bad.status, ExecStatus::Failed);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReturnCode::Exit(127).to_string(), "127");
        assert_eq!(ReturnCode::Incomplete.to_string(), "nok");
    }
}
