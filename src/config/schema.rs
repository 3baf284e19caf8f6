use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "build": {
                "type": "object",
                "properties": {
                    "command": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            },
            "bundle": {
                "type": "object",
                "properties": {
                    "artifact_glob": { "type": "string" },
                    "excellent_kb": { "type": "number", "minimum": 0 },
                    "warning_kb": { "type": "number", "minimum": 0 },
                    "critical_kb": { "type": "number", "minimum": 0 }
                }
            },
            "scan": {
                "type": "object",
                "properties": {
                    "source_dir": { "type": "string" },
                    "file_patterns": { "type": "array", "items": { "type": "string" } },
                    "pattern": { "type": "string" },
                    "exclude_dirs": { "type": "array", "items": { "type": "string" } }
                }
            },
            "audit": {
                "type": "object",
                "properties": {
                    "command": { "type": "string" },
                    "result_path": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 },
                    "performance_good": { "$ref": "#/$defs/score" },
                    "accessibility_good": { "$ref": "#/$defs/score" },
                    "best_practices_good": { "$ref": "#/$defs/score" },
                    "seo_good": { "$ref": "#/$defs/score" }
                }
            }
        },
        "$defs": {
            "score": { "type": "number", "minimum": 0, "maximum": 100 }
        }
    })
});
