//! Fixed reference data served to clients: the selectable options for each
//! entry field and the coping-strategy library. These lists are a UI
//! affordance only — the store accepts quadrant identifiers outside them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SymptomItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CopingStrategy {
    pub id: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const EMOTION_OPTIONS: [&str; 5] = ["calm", "happy", "anxious", "sad", "angry"];

pub const TRIGGER_OPTIONS: [&str; 4] = ["home", "school", "work", "social"];

pub const MIND_ITEMS: [SymptomItem; 5] = [
    SymptomItem { id: "racing-thoughts", label: "Racing thoughts" },
    SymptomItem { id: "overthinking", label: "Overthinking" },
    SymptomItem { id: "difficulty-concentrating", label: "Difficulty concentrating" },
    SymptomItem { id: "memory-issues", label: "Memory issues" },
    SymptomItem { id: "negative-thought-patterns", label: "Negative thought patterns" },
];

pub const BODY_ITEMS: [SymptomItem; 5] = [
    SymptomItem { id: "rapid-heartbeat", label: "Rapid heartbeat" },
    SymptomItem { id: "trouble-sleeping", label: "Trouble sleeping" },
    SymptomItem { id: "muscle-tension", label: "Muscle tension" },
    SymptomItem { id: "headaches", label: "Headaches" },
    SymptomItem { id: "stomach-issues", label: "Stomach issues" },
];

pub const EMOTION_ITEMS: [SymptomItem; 5] = [
    SymptomItem { id: "overwhelmed", label: "Overwhelmed" },
    SymptomItem { id: "irritable", label: "Irritable" },
    SymptomItem { id: "fearful", label: "Fearful" },
    SymptomItem { id: "sad", label: "Sad" },
    SymptomItem { id: "worried", label: "Worried" },
];

pub const BEHAVIOR_ITEMS: [SymptomItem; 5] = [
    SymptomItem { id: "avoiding-situations", label: "Avoiding situations" },
    SymptomItem { id: "procrastination", label: "Procrastination" },
    SymptomItem { id: "restlessness", label: "Restlessness" },
    SymptomItem { id: "increased-irritability", label: "Increased irritability" },
    SymptomItem { id: "social-withdrawal", label: "Social withdrawal" },
];

pub const COPING_STRATEGIES: [CopingStrategy; 6] = [
    CopingStrategy {
        id: 1,
        title: "Deep Breathing",
        description: "Practice 4-7-8 breathing: inhale for 4, hold for 7, exhale for 8.",
        category: "relaxation",
    },
    CopingStrategy {
        id: 2,
        title: "Mindfulness",
        description: "Focus on the present moment without judgment.",
        category: "mindfulness",
    },
    CopingStrategy {
        id: 3,
        title: "Progressive Relaxation",
        description: "Tense and then release each muscle group.",
        category: "relaxation",
    },
    CopingStrategy {
        id: 4,
        title: "Positive Self-Talk",
        description: "Replace negative thoughts with positive affirmations.",
        category: "cognitive",
    },
    CopingStrategy {
        id: 5,
        title: "Physical Exercise",
        description: "Even a short walk can reduce anxiety.",
        category: "physical",
    },
    CopingStrategy {
        id: 6,
        title: "Journaling",
        description: "Write down your thoughts and feelings.",
        category: "cognitive",
    },
];
