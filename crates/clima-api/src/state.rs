//! Application state shared across handlers.

use clima_core::models::{Answer, Question, QuestionWithAnswer};
use clima_core::Config;
use clima_services::ProcessorClient;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Config,
    /// Absent when no processing service URL is configured; uploads are
    /// then accepted in skip mode.
    pub forwarding: Option<Arc<dyn ProcessorClient>>,
    pub questions: QuestionCatalog,
}

/// In-memory question/answer catalog.
///
/// Questions are append-only (user submissions); the answer set is fixed at
/// startup. The lock is the one piece of shared mutable state in the service.
pub struct QuestionCatalog {
    questions: RwLock<Vec<Question>>,
    answers: Vec<Answer>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        Self {
            questions: RwLock::new(questions),
            answers,
        }
    }

    fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub async fn all(&self) -> Vec<QuestionWithAnswer> {
        let questions = self.questions.read().await;
        questions
            .iter()
            .map(|q| QuestionWithAnswer::join(q, self.answer_for(&q.id)))
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<QuestionWithAnswer> {
        let questions = self.questions.read().await;
        questions
            .iter()
            .find(|q| q.id == id)
            .map(|q| QuestionWithAnswer::join(q, self.answer_for(&q.id)))
    }

    /// Append a user-submitted question and return it. IDs continue the
    /// `q{n}` sequence.
    pub async fn submit(&self, question: String, explanation: Option<String>) -> Question {
        let mut questions = self.questions.write().await;
        let help_text = explanation
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "No explanation provided".to_string());

        let new_question = Question {
            id: format!("q{}", questions.len() + 1),
            question: question.trim().to_string(),
            category: "User Submitted".to_string(),
            subcategory: "General".to_string(),
            required: false,
            help_text: Some(help_text),
        };
        questions.push(new_question.clone());
        new_question
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.questions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> QuestionCatalog {
        let questions = vec![Question {
            id: "q1".to_string(),
            question: "What physical climate risks apply?".to_string(),
            category: "Risk Identification".to_string(),
            subcategory: "Physical Risks".to_string(),
            required: true,
            help_text: Some("Consider flooding and heat stress".to_string()),
        }];
        let answers = vec![Answer {
            question_id: "q1".to_string(),
            response: "Coastal flooding is the dominant exposure.".to_string(),
            confidence: 0.9,
            citations: vec!["Annual Report 2023, Page 45".to_string()],
        }];
        QuestionCatalog::new(questions, answers)
    }

    #[tokio::test]
    async fn test_all_joins_answers() {
        let catalog = catalog();
        let all = catalog.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].answer, "Coastal flooding is the dominant exposure.");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        assert!(catalog().get("q99").await.is_none());
    }

    #[tokio::test]
    async fn test_submit_appends_with_sequential_id() {
        let catalog = catalog();
        let submitted = catalog
            .submit("How is water stress managed?".to_string(), None)
            .await;
        assert_eq!(submitted.id, "q2");
        assert_eq!(submitted.category, "User Submitted");
        assert_eq!(
            submitted.help_text.as_deref(),
            Some("No explanation provided")
        );
        assert_eq!(catalog.len().await, 2);

        // Submitted questions have no answer yet
        let joined = catalog.get("q2").await.unwrap();
        assert_eq!(joined.answer, "No answer available");
    }
}
