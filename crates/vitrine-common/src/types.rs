//! Core types shared across Vitrine components.

use serde::{Deserialize, Serialize};

/// Arithmetic operator used in a verification challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Mul,
}

impl Operator {
    /// Symbol as rendered in the question text
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "x",
        }
    }

    pub fn apply(&self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a + b,
            Self::Mul => a * b,
        }
    }
}

/// A human-verification challenge.
///
/// The question text and the expected answer always come from the same
/// generation event; the pair is replaced as a unit and the answer never
/// leaves the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Question text shown to the visitor, e.g. "3 + 4 = ?"
    pub question: String,

    /// Expected integer answer
    pub answer: i64,

    /// Operator the question was built with
    pub operator: Operator,
}

impl Challenge {
    /// Build a challenge from explicit operands
    pub fn from_operands(operator: Operator, a: i64, b: i64) -> Self {
        Self {
            question: format!("{} {} {} = ?", a, operator.symbol(), b),
            answer: operator.apply(a, b),
            operator,
        }
    }

    /// Check a visitor-typed answer against the stored one.
    ///
    /// Input that does not parse as an integer counts as a mismatch.
    pub fn accepts(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<i64>()
            .map(|n| n == self.answer)
            .unwrap_or(false)
    }
}

/// Contact form fields as typed by the visitor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Wire payload for the intake endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// Static credential identifying the sender
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Fixed subject line
    pub subject: String,
}

impl SubmissionPayload {
    pub fn new(form: &ContactForm, access_key: &str, subject: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            subject: subject.to_string(),
        }
    }
}

/// Intake endpoint reply body.
///
/// Refusals are expected to carry a `message`; anything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Terminal result of one transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// HTTP 200 from the intake endpoint
    Delivered,
    /// Non-200 reply, with the body message when one was provided
    Refused { message: Option<String> },
    /// The request never completed
    TransportFailed,
}

/// Kind of on-page status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_from_operands() {
        let add = Challenge::from_operands(Operator::Add, 3, 4);
        assert_eq!(add.question, "3 + 4 = ?");
        assert_eq!(add.answer, 7);

        let mul = Challenge::from_operands(Operator::Mul, 2, 5);
        assert_eq!(mul.question, "2 x 5 = ?");
        assert_eq!(mul.answer, 10);
    }

    #[test]
    fn test_challenge_accepts() {
        let challenge = Challenge::from_operands(Operator::Add, 3, 4);
        assert!(challenge.accepts("7"));
        assert!(challenge.accepts(" 7 "));
        assert!(!challenge.accepts("8"));
        assert!(!challenge.accepts("seven"));
        assert!(!challenge.accepts(""));
    }

    #[test]
    fn test_payload_wire_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        let payload = SubmissionPayload::new(&form, "key-123", "Subject line");
        let value = serde_json::to_value(&payload).unwrap();

        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["access_key", "email", "message", "name", "subject"]);
        assert_eq!(value["access_key"], "key-123");
        assert_eq!(value["subject"], "Subject line");
    }

    #[test]
    fn test_intake_reply_tolerates_empty_body() {
        let reply: IntakeReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.message, None);

        let reply: IntakeReply = serde_json::from_str(r#"{"message":"Invalid key"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Invalid key"));
    }
}
