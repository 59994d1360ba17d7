use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mapping::{Mapping, ToMapping};

/// One entry of the `logs` collection returned by the log endpoints.
///
/// Every key is optional on the wire: keys the server leaves out decode to
/// `None` (explicit `null`s as well), while unknown keys are dropped.
/// Serializing always emits all three keys, absent fields as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntryRecord {
    /// Display-oriented name of the dashboard view this entry belongs to.
    pub dashboard_view: Option<String>,

    /// Unique identifier of the log entry.
    pub log_id: Option<String>,

    /// Free-form structured summary; the server does not constrain its shape.
    pub log_summary: Option<Value>,
}

impl LogEntryRecord {
    /// An empty record with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the mapping form of another model in `log_summary`
    pub fn set_summary_model<T: ToMapping>(&mut self, summary: &T) {
        self.log_summary = Some(summary.to_value());
    }
}

impl ToMapping for LogEntryRecord {
    fn to_mapping(&self) -> Mapping {
        let mut out = Mapping::new();
        out.insert(
            "dashboard_view".to_string(),
            self.dashboard_view
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );
        out.insert(
            "log_id".to_string(),
            self.log_id.clone().map(Value::String).unwrap_or(Value::Null),
        );
        out.insert(
            "log_summary".to_string(),
            self.log_summary.clone().unwrap_or(Value::Null),
        );
        out
    }
}

impl fmt::Display for LogEntryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.to_value()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
