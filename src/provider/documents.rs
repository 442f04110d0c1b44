//! Document library data and views

use super::Record;
use serde::{Deserialize, Serialize};

/// Processing status of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Ready,
    Processing,
    Error,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Ready => "Ready for use",
            DocumentStatus::Processing => "Processing...",
            DocumentStatus::Error => "Error processing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    /// RFC 3339
    pub created_at: String,
    pub status: DocumentStatus,
    /// File extension, e.g. `pdf`, `doc`, `xlsx`
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes
    pub size: u64,
}

impl Record for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Type filter tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFilter {
    #[default]
    All,
    Pdf,
    Doc,
    Other,
}

impl DocumentFilter {
    pub fn matches(self, doc_type: &str) -> bool {
        match self {
            DocumentFilter::All => true,
            DocumentFilter::Pdf => doc_type == "pdf",
            DocumentFilter::Doc => doc_type == "doc",
            DocumentFilter::Other => doc_type != "pdf" && doc_type != "doc",
        }
    }
}

/// Search box plus filter tab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filter: DocumentFilter,
}

impl DocumentQuery {
    /// Case-insensitive title match, then type filter
    pub fn apply(&self, documents: Vec<Document>) -> Vec<Document> {
        let needle = self.search.to_lowercase();
        documents
            .into_iter()
            .filter(|doc| doc.title.to_lowercase().contains(&needle))
            .filter(|doc| self.filter.matches(&doc.doc_type))
            .collect()
    }
}

/// Document plus display labels
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    #[serde(flatten)]
    pub document: Document,
    pub size_label: String,
    pub status_label: &'static str,
}

impl From<Document> for DocumentView {
    fn from(document: Document) -> Self {
        Self {
            size_label: format_file_size(document.size),
            status_label: document.status.label(),
            document,
        }
    }
}

/// Human-readable size with one decimal (`1.5 MB`)
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// The bundled sample library
pub fn mock_documents() -> Vec<Document> {
    let doc = |id: &str, title: &str, content: &str, created_at: &str, status, doc_type: &str, size| {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: created_at.to_string(),
            status,
            doc_type: doc_type.to_string(),
            size,
        }
    };

    vec![
        doc(
            "1",
            "Company Policies 2024",
            "This document outlines the company policies...",
            "2024-03-01T10:00:00Z",
            DocumentStatus::Ready,
            "pdf",
            1_024_576,
        ),
        doc(
            "2",
            "Technical Documentation",
            "Technical specifications and implementation details...",
            "2024-03-02T15:30:00Z",
            DocumentStatus::Processing,
            "doc",
            2_048_576,
        ),
        doc(
            "3",
            "Product Roadmap",
            "Upcoming features and development timeline...",
            "2024-03-03T09:15:00Z",
            DocumentStatus::Error,
            "pdf",
            512_000,
        ),
        doc(
            "4",
            "Market Research Analysis",
            "Analysis of current market trends and competitor strategies...",
            "2024-03-15T14:20:00Z",
            DocumentStatus::Ready,
            "xlsx",
            3_145_728,
        ),
        doc(
            "5",
            "Quarterly Financial Report",
            "Financial performance metrics for Q1 2024...",
            "2024-04-05T11:45:00Z",
            DocumentStatus::Ready,
            "pdf",
            1_572_864,
        ),
        doc(
            "6",
            "Project Milestones",
            "Key project milestones and deadlines for upcoming quarters...",
            "2024-04-08T09:30:00Z",
            DocumentStatus::Ready,
            "doc",
            856_123,
        ),
    ]
}
