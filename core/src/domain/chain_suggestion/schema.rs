use serde_json::json;

/// Returns the JSON schema for food chaining LLM responses
pub fn get_chain_suggestion_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "suggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "food_name": { "type": "string" },
                        "similarity_score": { "type": "number" },
                        "reasoning": { "type": "string" }
                    },
                    "required": ["food_name", "similarity_score", "reasoning"]
                }
            }
        },
        "required": ["suggestions"]
    })
}
