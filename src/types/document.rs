use chrono::{DateTime, Utc};
use entity::document::Model as DocumentModel;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RDocumentCreate {
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RDocumentUpdate {
    pub title: String,
    pub content: String,
}

/// What the list endpoint returns per document; content stays out of it.
#[derive(Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct DocumentOut {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DocumentModel> for DocumentSummary {
    fn from(doc: DocumentModel) -> Self {
        DocumentSummary {
            id: doc.id,
            title: doc.title,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<DocumentModel> for DocumentOut {
    fn from(doc: DocumentModel) -> Self {
        DocumentOut {
            id: doc.id,
            title: doc.title,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}
