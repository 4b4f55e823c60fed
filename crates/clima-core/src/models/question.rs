//! Question/answer catalog models.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub category: String,
    pub subcategory: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub response: String,
    pub confidence: f64,
    pub citations: Vec<String>,
}

/// A question joined with its answer for the read API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionWithAnswer {
    pub question: String,
    pub answer: String,
    pub citation: Vec<String>,
    pub explanation: String,
}

impl QuestionWithAnswer {
    /// Join a question with its answer, filling fallbacks for missing parts.
    pub fn join(question: &Question, answer: Option<&Answer>) -> Self {
        Self {
            question: question.question.clone(),
            answer: answer
                .map(|a| a.response.clone())
                .unwrap_or_else(|| "No answer available".to_string()),
            citation: answer.map(|a| a.citations.clone()).unwrap_or_default(),
            explanation: question
                .help_text
                .clone()
                .unwrap_or_else(|| "No explanation available".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_answer() {
        let question = Question {
            id: "q1".to_string(),
            question: "What physical risks apply?".to_string(),
            category: "Risk".to_string(),
            subcategory: "Physical".to_string(),
            required: true,
            help_text: Some("Consider flooding and heat stress".to_string()),
        };
        let answer = Answer {
            question_id: "q1".to_string(),
            response: "Coastal flooding".to_string(),
            confidence: 0.9,
            citations: vec!["Annual Report 2023, p. 45".to_string()],
        };
        let joined = QuestionWithAnswer::join(&question, Some(&answer));
        assert_eq!(joined.answer, "Coastal flooding");
        assert_eq!(joined.citation.len(), 1);
        assert_eq!(joined.explanation, "Consider flooding and heat stress");
    }

    #[test]
    fn test_join_without_answer_uses_fallbacks() {
        let question = Question {
            id: "q2".to_string(),
            question: "Transition risks?".to_string(),
            category: "Risk".to_string(),
            subcategory: "Transition".to_string(),
            required: false,
            help_text: None,
        };
        let joined = QuestionWithAnswer::join(&question, None);
        assert_eq!(joined.answer, "No answer available");
        assert!(joined.citation.is_empty());
        assert_eq!(joined.explanation, "No explanation available");
    }
}
