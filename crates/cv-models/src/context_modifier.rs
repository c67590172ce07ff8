//! Context Modifier
//!
//! Records data changes, log lines, and errors produced while handling a
//! request. The platform applies the changes on its side; [`ContextModifier::apply`]
//! replays them against a local [`Context`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::Context;
use crate::flaggable::Flaggable;

/// Data bag a change targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeScope {
    /// Execution-local data
    Context,
    Session,
    User,
    /// Environment-wide data, only held by the platform
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeOperation {
    Set,
    Delete,
    Clear,
}

/// A single recorded change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextChange {
    #[serde(rename = "type")]
    pub scope: ChangeScope,
    pub op: ChangeOperation,
    /// Empty for clears
    pub key: String,
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Numeric severity used by the platform's log viewer
    pub fn severity(&self) -> u8 {
        match self {
            Self::Trace => 0,
            Self::Debug => 5,
            Self::Info => 10,
            Self::Warning => 15,
            Self::Error => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Where in the blueprint an error originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSource {
    Node,
    Link,
    Other,
}

/// An error raised while executing a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionError {
    pub et: ErrorSource,
    pub graph_id: i64,
    pub graph_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_source: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_dest: Option<i64>,
    pub message: String,
}

/// Accumulated changes, logs, and errors for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextModifier {
    #[serde(default)]
    pub changes: Vec<ContextChange>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub errors: Vec<ExecutionError>,
}

impl ContextModifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn change(mut self, scope: ChangeScope, op: ChangeOperation, key: &str, data: Value) -> Self {
        self.changes.push(ContextChange {
            scope,
            op,
            key: key.to_string(),
            data,
        });
        self
    }

    pub fn error(mut self, error: ExecutionError) -> Self {
        self.errors.push(error);
        self
    }

    // Set

    /// Set a key in the context scope
    pub fn set(self, key: &str, data: impl Into<Value>) -> Self {
        self.change(ChangeScope::Context, ChangeOperation::Set, key, data.into())
    }

    /// Set a key in the session scope
    pub fn set_session(self, key: &str, data: impl Into<Value>) -> Self {
        self.change(ChangeScope::Session, ChangeOperation::Set, key, data.into())
    }

    /// Set a key in the user scope
    pub fn set_user(self, key: &str, data: impl Into<Value>) -> Self {
        self.change(ChangeScope::User, ChangeOperation::Set, key, data.into())
    }

    /// Set a key in the environment scope
    pub fn set_environment(self, key: &str, data: impl Into<Value>) -> Self {
        self.change(ChangeScope::Environment, ChangeOperation::Set, key, data.into())
    }

    // Delete

    pub fn delete(self, key: &str) -> Self {
        self.change(ChangeScope::Context, ChangeOperation::Delete, key, Value::Null)
    }

    pub fn delete_session(self, key: &str) -> Self {
        self.change(ChangeScope::Session, ChangeOperation::Delete, key, Value::Null)
    }

    pub fn delete_user(self, key: &str) -> Self {
        self.change(ChangeScope::User, ChangeOperation::Delete, key, Value::Null)
    }

    pub fn delete_environment(self, key: &str) -> Self {
        self.change(ChangeScope::Environment, ChangeOperation::Delete, key, Value::Null)
    }

    // Clear

    pub fn clear(self) -> Self {
        self.change(ChangeScope::Context, ChangeOperation::Clear, "", Value::Null)
    }

    pub fn clear_session(self) -> Self {
        self.change(ChangeScope::Session, ChangeOperation::Clear, "", Value::Null)
    }

    pub fn clear_user(self) -> Self {
        self.change(ChangeScope::User, ChangeOperation::Clear, "", Value::Null)
    }

    pub fn clear_environment(self) -> Self {
        self.change(ChangeScope::Environment, ChangeOperation::Clear, "", Value::Null)
    }

    // Logging

    /// Add a log line to be shipped with the request
    pub fn log(mut self, level: LogLevel, message: impl Into<String>) -> Self {
        self.logs.push(LogEntry {
            level,
            message: message.into(),
            time: Utc::now(),
        });
        self
    }

    pub fn log_trace(self, message: impl Into<String>) -> Self {
        self.log(LogLevel::Trace, message)
    }

    pub fn log_debug(self, message: impl Into<String>) -> Self {
        self.log(LogLevel::Debug, message)
    }

    pub fn log_info(self, message: impl Into<String>) -> Self {
        self.log(LogLevel::Info, message)
    }

    pub fn log_warning(self, message: impl Into<String>) -> Self {
        self.log(LogLevel::Warning, message)
    }

    pub fn log_error(self, message: impl Into<String>) -> Self {
        self.log(LogLevel::Error, message)
    }

    /// Replay recorded changes and errors against `ctx`, in order
    ///
    /// Environment changes are skipped; the context holds no environment data.
    pub fn apply(&self, ctx: &mut Context) {
        for change in &self.changes {
            let target: &mut Flaggable = match change.scope {
                ChangeScope::Context => &mut ctx.flags,
                ChangeScope::Session => &mut ctx.session.flags,
                ChangeScope::User => &mut ctx.user.flags,
                ChangeScope::Environment => {
                    tracing::debug!(key = %change.key, op = ?change.op, "Skipping environment change");
                    continue;
                }
            };

            match change.op {
                ChangeOperation::Set => target.set(change.key.clone(), change.data.clone()),
                ChangeOperation::Delete => {
                    target.remove(&change.key);
                }
                ChangeOperation::Clear => target.clear(),
            }
        }

        for error in &self.errors {
            ctx.push_error(error.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_error(message: &str) -> ExecutionError {
        ExecutionError {
            et: ErrorSource::Node,
            graph_id: 1,
            graph_name: "main".to_string(),
            node_id: Some(7),
            link_source: None,
            link_dest: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_changes_are_recorded_in_order() {
        let modifier = ContextModifier::new()
            .set("a", 1)
            .set_session("b", "two")
            .delete_user("c")
            .clear_environment();

        let recorded: Vec<_> = modifier
            .changes
            .iter()
            .map(|c| (c.scope, c.op, c.key.as_str()))
            .collect();

        assert_eq!(
            recorded,
            vec![
                (ChangeScope::Context, ChangeOperation::Set, "a"),
                (ChangeScope::Session, ChangeOperation::Set, "b"),
                (ChangeScope::User, ChangeOperation::Delete, "c"),
                (ChangeScope::Environment, ChangeOperation::Clear, ""),
            ]
        );
    }

    #[test]
    fn test_change_wire_format() {
        let modifier = ContextModifier::new().set_user("plan", "pro");
        assert_eq!(
            serde_json::to_value(&modifier.changes[0]).unwrap(),
            json!({"type": "USER", "op": "SET", "key": "plan", "data": "pro"})
        );
    }

    #[test]
    fn test_logs() {
        let modifier = ContextModifier::new()
            .log_trace("t")
            .log_debug("d")
            .log_info("i")
            .log_warning("w")
            .log_error("e");

        let severities: Vec<_> = modifier.logs.iter().map(|l| l.level.severity()).collect();
        assert_eq!(severities, vec![0, 5, 10, 15, 20]);
        assert_eq!(modifier.logs[3].message, "w");
        assert!(LogLevel::Warning > LogLevel::Info);
    }

    #[test]
    fn test_error_wire_format() {
        let error = node_error("boom");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "et": "node",
                "graphId": 1,
                "graphName": "main",
                "nodeId": 7,
                "message": "boom"
            })
        );
    }

    #[test]
    fn test_apply() {
        let mut ctx = Context::new();
        ctx.flags.set("stale", true);
        ctx.user.flags.set("name", "Ann");
        ctx.session.flags.set("step", 1);

        ContextModifier::new()
            .clear()
            .set("fresh", true)
            .set_session("step", 2)
            .delete_user("name")
            .set_user("plan", "pro")
            .set_environment("ignored", 1)
            .error(node_error("boom"))
            .apply(&mut ctx);

        assert!(!ctx.flags.contains("stale"));
        assert_eq!(ctx.flags.get::<bool>("fresh"), Some(true));
        assert_eq!(ctx.session.flags.get::<i64>("step"), Some(2));
        assert!(!ctx.user.flags.contains("name"));
        assert_eq!(ctx.user.flags.get::<String>("plan"), Some("pro".to_string()));
        assert!(!ctx.flags.contains("ignored"));
        assert!(ctx.has_errors());
        assert_eq!(ctx.errors.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_apply_respects_order() {
        let mut ctx = Context::new();

        ContextModifier::new()
            .set_session("a", 1)
            .clear_session()
            .set_session("b", 2)
            .apply(&mut ctx);

        assert!(!ctx.session.flags.contains("a"));
        assert_eq!(ctx.session.flags.get::<i64>("b"), Some(2));
    }
}
