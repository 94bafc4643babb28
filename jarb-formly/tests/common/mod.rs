//! Shared fixtures for transformer tests.

#![allow(dead_code)]

use async_trait::async_trait;
use jarb_store::{ConstraintsFetcher, ConstraintsStore, FetchResponse, StoreResult};
use jarb_types::{ConstraintMap, FieldDescriptor};
use serde_json::{json, Value};

/// Serves a fixed payload for any URL.
pub struct FixedFetcher(pub Value);

#[async_trait]
impl ConstraintsFetcher for FixedFetcher {
    async fn fetch(&self, url: &str) -> StoreResult<FetchResponse> {
        Ok(FetchResponse {
            url: url.to_string(),
            status: 200,
            data: self.0.clone(),
        })
    }
}

/// The `Hero` constraints the transformer tests run against.
pub fn hero_payload() -> Value {
    json!({
        "Hero": {
            "name": {
                "javaType": "java.lang.String",
                "types": [],
                "required": true,
                "minimumLength": 5,
                "maximumLength": 50,
                "fractionLength": null,
                "radix": null,
                "pattern": null,
                "min": null,
                "max": null,
                "name": "name"
            },
            "email": {
                "javaType": "java.lang.String",
                "types": ["email", "text"],
                "required": true,
                "maximumLength": 255,
                "name": "email"
            },
            "age": {
                "javaType": "java.lang.Integer",
                "types": ["number"],
                "required": null,
                "minimumLength": null,
                "maximumLength": null,
                "fractionLength": null,
                "min": null,
                "max": null,
                "name": "age"
            },
            "favoriteNumber": {
                "javaType": "java.lang.Integer",
                "types": ["number"],
                "min": 42,
                "max": 1337,
                "name": "favoriteNumber"
            },
            "salary": {
                "javaType": "java.math.BigDecimal",
                "types": ["number"],
                "fractionLength": 4,
                "name": "salary"
            },
            "lives": {
                "javaType": "java.lang.Integer",
                "types": ["number"],
                "minimumLength": 0,
                "min": 0,
                "max": 9,
                "name": "lives"
            },
            "birthDate": {
                "javaType": "java.time.LocalDate",
                "types": ["date"],
                "maximumLength": 8
            },
            "deathTime": {
                "javaType": "java.time.LocalDateTime",
                "types": ["date"],
                "maximumLength": 14
            }
        }
    })
}

pub fn hero_store() -> ConstraintsStore {
    let store = ConstraintsStore::new(FixedFetcher(hero_payload()));
    store.set_constraints(ConstraintMap::from_value(hero_payload()).unwrap());
    store
}

pub fn empty_store() -> ConstraintsStore {
    ConstraintsStore::new(FixedFetcher(json!({})))
}

/// A renderer field definition for `key`.
pub fn input_field(key: &str, input_type: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::from_value(json!({
        "id": key,
        "key": key,
        "type": "input",
        "templateOptions": {
            "type": input_type,
            "label": label,
            "placeholder": format!("Please enter the {label} of the hero")
        }
    }))
    .unwrap()
}
