//! Language guard for every user-facing string the engine produces.
//!
//! Suggestions, report messages and insights are descriptive, never
//! prescriptive. Text containing any of [`BANNED_PHRASES`] is rejected, and
//! suggestion reasoning must name at least one sensory characteristic.

pub const BANNED_PHRASES: [&str; 7] = [
    "should",
    "must",
    "need to",
    "problem",
    "bad",
    "unhealthy",
    "fix",
];

const SENSORY_TERMS: [&str; 30] = [
    "texture",
    "crunch",
    "crisp",
    "soft",
    "smooth",
    "creamy",
    "chewy",
    "tender",
    "flaky",
    "fluffy",
    "melty",
    "flavor",
    "taste",
    "salty",
    "sweet",
    "mild",
    "savory",
    "tangy",
    "cheesy",
    "buttery",
    "fruity",
    "nutty",
    "plain",
    "spiced",
    "warm",
    "cold",
    "chilled",
    "hot",
    "temperature",
    "toasty",
];

/// True when `text` contains none of the banned phrases (case-insensitive).
pub fn is_gentle(text: &str) -> bool {
    let lowered = text.to_lowercase();
    !BANNED_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

/// True when `text` names a texture, flavor or temperature.
pub fn mentions_sensory_trait(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SENSORY_TERMS.iter().any(|term| lowered.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_phrases_are_detected_case_insensitively() {
        assert!(!is_gentle("You SHOULD eat more greens"));
        assert!(!is_gentle("This is a problem"));
        assert!(!is_gentle("Time to fix your diet"));
        assert!(!is_gentle("you need to branch out"));
        assert!(is_gentle("Same crispy texture with a mild flavor"));
    }

    #[test]
    fn test_sensory_trait_detection() {
        assert!(mentions_sensory_trait("Similar crunchy coating"));
        assert!(mentions_sensory_trait("Served warm, like the original"));
        assert!(!mentions_sensory_trait("A popular choice"));
    }
}
