// Prompt text and the heuristics that shape it.

pub const SAFE_SYSTEM_PROMPT: &str = "You are an AI legal information assistant. You do NOT provide legal advice. \
You provide general, educational information only. You are not a lawyer and \
no attorney-client relationship is formed. Always include a brief disclaimer, \
highlight uncertainties, avoid definitive prescriptions, and encourage the user \
to consult a qualified attorney for their specific situation. If the user asks for \
instructions that constitute practicing law (e.g., drafting binding documents, \
predicting case outcomes, or advising on litigation strategy), respond with high-level \
educational context and recommend seeking professional counsel.";

pub const DISCLAIMER: &str = "This response is for educational purposes only and is not legal advice. \
No attorney-client relationship is formed. Laws vary by jurisdiction and change \
over time. Consult a licensed attorney for advice on your specific situation.";

pub const EMPTY_QUESTION_ANSWER: &str =
    "Please provide a clear question so I can share general, educational information.";

pub const NO_CONTENT_ANSWER: &str = "I could not generate a response at this time.";

pub const PROVIDER_FAILURE_PREFACE: &str = "I encountered an issue contacting the LLM provider. \
Here is a general, educational overview instead.\n\n";

const SENSITIVE_PHRASES: &[&str] = &[
    "draft a contract",
    "write a contract",
    "guarantee outcome",
    "guarantee win",
    "specific legal advice",
    "tell me what to do in court",
    "litigation strategy",
    "is this legal in my case",
];

/// Trimmed fields of one question, plus the sensitivity flag derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub question: String,
    pub jurisdiction: String,
    pub topic: String,
    pub mode: String,
    pub sensitive: bool,
}

impl Inquiry {
    pub fn new(question: &str, jurisdiction: &str, topic: &str, mode: &str) -> Self {
        let question = question.trim().to_string();
        let sensitive = is_sensitive(&question);
        Self {
            question,
            jurisdiction: jurisdiction.trim().to_string(),
            topic: topic.trim().to_string(),
            mode: mode.trim().to_string(),
            sensitive,
        }
    }
}

pub fn is_sensitive(question: &str) -> bool {
    let lowered = question.to_lowercase();
    SENSITIVE_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

/// User message sent to the chat model.
pub fn compose_user_message(inquiry: &Inquiry) -> String {
    let mut parts = vec!["User question:".to_string(), inquiry.question.clone()];
    if !inquiry.jurisdiction.is_empty() {
        parts.push(format!("\nJurisdiction (optional): {}", inquiry.jurisdiction));
    }
    if !inquiry.topic.is_empty() {
        parts.push(format!("\nTopic (optional): {}", inquiry.topic));
    }
    if !inquiry.mode.is_empty() {
        parts.push(format!("\nMode (optional): {}", inquiry.mode));
    }
    if inquiry.sensitive {
        parts.push(
            "\nNOTE: The question appears to request specific legal advice or drafting. \
             Provide only general, high-level educational information and suggest speaking to a lawyer."
                .to_string(),
        );
    }
    parts.push(
        "\nStructure your response as:\n\
         - Brief summary (educational only)\n\
         - Key considerations and variables\n\
         - Potential next steps and resources\n\
         Avoid definitive legal conclusions; emphasize consulting an attorney."
            .to_string(),
    );
    parts.join("\n")
}

/// Offline summary used by the mock provider and as the fallback when the model call fails.
pub fn content_summary(inquiry: &Inquiry) -> String {
    let mut lines = vec![format!("Question: {}", inquiry.question)];
    if !inquiry.jurisdiction.is_empty() {
        lines.push(format!("Jurisdiction (provided): {}", inquiry.jurisdiction));
    }
    if !inquiry.topic.is_empty() {
        lines.push(format!("Topic (provided): {}", inquiry.topic));
    }
    if inquiry.sensitive {
        lines.push(
            "Note: The question seems to seek specific legal advice or document drafting. \
             Only high-level educational context is provided here."
                .to_string(),
        );
    }
    lines.push(
        "Common considerations may include the governing law, deadlines, required notices, \
         contract terms or statutes that could apply, and factual nuances."
            .to_string(),
    );
    lines.join("\n")
}

pub fn mock_answer(summary: &str) -> String {
    format!(
        "Educational overview only (not legal advice).\n\n\
         Key points to consider:\n\
         - Laws vary by jurisdiction and may have changed.\n\
         - Context matters; small facts can alter outcomes.\n\
         - Consider speaking with a licensed attorney.\n\n\
         General information about your question:\n{}\n\n\
         Next steps you might take (non-exhaustive):\n\
         - Identify your jurisdiction and any relevant deadlines.\n\
         - Collect documents and timeline of events.\n\
         - Contact a local legal aid clinic or bar association referral service.\n",
        summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitivity_is_case_insensitive() {
        assert!(is_sensitive("Can you DRAFT A CONTRACT for my landlord?"));
        assert!(!is_sensitive("What is a lease?"));
    }

    #[test]
    fn inquiry_trims_every_field() {
        let inquiry = Inquiry::new("  What is a lease? ", " CA ", "\thousing", " concise ");
        assert_eq!(inquiry.question, "What is a lease?");
        assert_eq!(inquiry.jurisdiction, "CA");
        assert_eq!(inquiry.topic, "housing");
        assert_eq!(inquiry.mode, "concise");
        assert!(!inquiry.sensitive);
    }

    #[test]
    fn user_message_skips_blank_optionals() {
        let inquiry = Inquiry::new("What is a lease?", "", "housing", "");
        let message = compose_user_message(&inquiry);
        assert!(message.starts_with("User question:\nWhat is a lease?"));
        assert!(message.contains("Topic (optional): housing"));
        assert!(!message.contains("Jurisdiction"));
        assert!(!message.contains("Mode"));
        assert!(!message.contains("NOTE:"));
    }

    #[test]
    fn summary_notes_sensitive_questions() {
        let inquiry = Inquiry::new("What is my litigation strategy?", "Texas", "", "");
        let summary = content_summary(&inquiry);
        assert!(summary.contains("Jurisdiction (provided): Texas"));
        assert!(summary.contains("Only high-level educational context"));
    }

    #[test]
    fn mock_answer_embeds_summary() {
        let answer = mock_answer("Question: q");
        assert!(answer.starts_with("Educational overview only"));
        assert!(answer.contains("General information about your question:\nQuestion: q\n"));
    }
}
