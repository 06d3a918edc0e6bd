use axum::Json;
use serde_json::{json, Value};

use crate::catalog::{
    BEHAVIOR_ITEMS, BODY_ITEMS, COPING_STRATEGIES, EMOTION_ITEMS, EMOTION_OPTIONS, MIND_ITEMS,
    TRIGGER_OPTIONS,
};

pub async fn catalog() -> Json<Value> {
    Json(json!({
        "emotions": EMOTION_OPTIONS,
        "triggers": TRIGGER_OPTIONS,
        "quadrants": {
            "mind": MIND_ITEMS,
            "body": BODY_ITEMS,
            "emotions": EMOTION_ITEMS,
            "behaviors": BEHAVIOR_ITEMS,
        },
    }))
}

pub async fn coping_strategies() -> Json<Value> {
    Json(json!(COPING_STRATEGIES))
}
