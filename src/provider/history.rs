//! Past conversation list

use super::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    /// First line of the opening user message
    pub preview: String,
    pub timestamp: String,
    pub message_count: u32,
    pub model: String,
}

impl Record for HistoryEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn mock_history() -> Vec<HistoryEntry> {
    let entry = |id: &str, title: &str, preview: &str, timestamp: &str, message_count, model: &str| {
        HistoryEntry {
            id: id.to_string(),
            title: title.to_string(),
            preview: preview.to_string(),
            timestamp: timestamp.to_string(),
            message_count,
            model: model.to_string(),
        }
    };

    vec![
        entry(
            "1",
            "How RAG works",
            "Explain how RAG works in simple terms",
            "2024-04-10 09:12:44",
            6,
            "llama3-8b-8192",
        ),
        entry(
            "2",
            "Policy summary",
            "Summarize the company policies document for me",
            "2024-04-09 16:03:10",
            4,
            "llama3-70b-8192",
        ),
        entry(
            "3",
            "Python web scraper",
            "Generate code for a Python web scraper",
            "2024-04-08 11:47:29",
            8,
            "mixtral-8x7b-32768",
        ),
        entry(
            "4",
            "Embedding best practices",
            "What are best practices for document embedding?",
            "2024-04-05 14:20:02",
            3,
            "gemma-7b-it",
        ),
    ]
}
