use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::store::Resource;

/// A pre-canned dashboard template. The aggregation layer only cares about
/// `id`; everything else is carried opaquely for the serving layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protoboard {
    pub id: String,
    #[serde(default)]
    pub meta: ProtoboardMeta,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtoboardMeta {
    pub name: String,
    pub version: String,
    pub dashboard_version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<String>,
}

impl Protoboard {
    /// New protoboard with a freshly minted ID.
    pub fn new(meta: ProtoboardMeta, data: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            meta,
            data,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Resource for Protoboard {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_uses_wire_field_names() {
        let raw = r#"{
            "id": "p1",
            "meta": {
                "name": "InfluxDB",
                "dashboardVersion": "1.x",
                "measurements": ["runtime", "database"]
            },
            "data": {"cells": []}
        }"#;

        let board = Protoboard::from_json(raw).unwrap();
        assert_eq!(board.id, "p1");
        assert_eq!(board.meta.dashboard_version, "1.x");
        assert_eq!(board.meta.measurements.len(), 2);

        let round = serde_json::to_value(&board).unwrap();
        assert!(round["meta"].get("dashboardVersion").is_some());
        assert!(round["meta"].get("dashboard_version").is_none());
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Protoboard::new(ProtoboardMeta::default(), Value::Null);
        let b = Protoboard::new(ProtoboardMeta::default(), Value::Null);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }
}
