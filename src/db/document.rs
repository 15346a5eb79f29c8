use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::document::{
    ActiveModel as DocumentActive, Column, Entity as Document, Model as DocumentModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl PostgresService {
    /// Most recently modified first.
    pub async fn list_documents(&self, owner_id: i32) -> Result<Vec<DocumentModel>, AppError> {
        Ok(Document::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn create_document(
        &self,
        owner_id: i32,
        title: Option<String>,
    ) -> Result<DocumentModel, AppError> {
        let now = Utc::now();
        Ok(DocumentActive {
            title: Set(title.unwrap_or_else(|| "Untitled Document".to_owned())),
            content: Set(String::new()),
            owner_id: Set(owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Both id and owner must match; a document id alone never suffices.
    pub async fn get_document(
        &self,
        owner_id: i32,
        id: i32,
    ) -> Result<Option<DocumentModel>, AppError> {
        Ok(Document::find()
            .filter(Column::Id.eq(id))
            .filter(Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?)
    }

    /// Read-modify-commit in one transaction; refreshes updated_at. None
    /// when the ownership check fails.
    pub async fn update_document(
        &self,
        owner_id: i32,
        id: i32,
        title: String,
        content: String,
    ) -> Result<Option<DocumentModel>, AppError> {
        let txn = self.db.begin().await?;
        let Some(doc) = Document::find()
            .filter(Column::Id.eq(id))
            .filter(Column::OwnerId.eq(owner_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut am: DocumentActive = doc.into();
        am.title = Set(title);
        am.content = Set(content);
        am.updated_at = Set(Utc::now());
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    /// True iff a row matching both id and owner was removed.
    pub async fn delete_document(&self, owner_id: i32, id: i32) -> Result<bool, AppError> {
        let res = Document::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::OwnerId.eq(owner_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn latest_document(&self, owner_id: i32) -> Result<Option<DocumentModel>, AppError> {
        Ok(Document::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_desc(Column::UpdatedAt)
            .one(&self.db)
            .await?)
    }

    /// Legacy single-document clients write to whichever document was
    /// touched most recently.
    pub async fn update_latest_document(
        &self,
        owner_id: i32,
        title: String,
        content: String,
    ) -> Result<Option<DocumentModel>, AppError> {
        match self.latest_document(owner_id).await? {
            Some(doc) => self.update_document(owner_id, doc.id, title, content).await,
            None => Ok(None),
        }
    }
}
