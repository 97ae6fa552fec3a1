//! Fixed reply texts: canned topic responses, emergency override, disclaimer, apologies.

/// Returned whenever an emergency phrase is present, regardless of other matches.
pub const EMERGENCY_RESPONSE: &str = "This sounds like a medical emergency. Please call emergency services (911) immediately. While waiting for help, try to stay calm and follow any first aid procedures you're aware of.";

/// Checked before the topic table. Order only matters for logging (first hit is reported).
pub const EMERGENCY_PHRASES: &[&str] = &[
    "heart attack",
    "stroke",
    "severe bleeding",
    "unconscious",
    "suicide",
    "overdose",
    "emergency",
];

/// Topic keyword -> canned response. Table order breaks ties.
pub const TOPIC_RESPONSES: &[(&str, &str)] = &[
    (
        "symptom",
        "I understand you're experiencing symptoms. Could you please describe them in more detail? This will help me provide better guidance. Remember, for accurate diagnosis, consulting a healthcare professional is essential.",
    ),
    (
        "appointment",
        "I can help you with scheduling an appointment. What type of specialist would you like to see, and what's your preferred time? I'll guide you through the booking process.",
    ),
    (
        "medication",
        "Medication adherence is crucial for effective treatment. Are you having any specific concerns about your medication? Remember to always consult your doctor before making any changes to your prescription.",
    ),
    (
        "pain",
        "I'm sorry to hear you're in pain. Could you tell me more about where it hurts and how long you've been experiencing this? This information is important for proper medical guidance.",
    ),
    (
        "fever",
        "I understand you have a fever. Is it accompanied by any other symptoms? Make sure to rest, stay hydrated, and monitor your temperature. If it's high or persistent, please seek medical attention.",
    ),
];

/// Appended to every generated reply (never to canned ones).
pub const DISCLAIMER: &str = "\n\nPlease note that I'm a healthcare assistant. For specific medical advice, always consult a healthcare professional.";

/// The generation backend failed to initialize; no call is attempted.
pub const APOLOGY_UNAVAILABLE: &str = "I apologize, but I'm having trouble. Please try again later.";

/// A generation call failed or produced nothing usable.
pub const APOLOGY_REPHRASE: &str =
    "I apologize, but I'm having trouble understanding. Could you please rephrase your question?";
