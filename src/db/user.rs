use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::document::{ActiveModel as DocumentActive, Column as DocumentColumn, Entity as Document};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    /// Signup: create the user and seed their first document in one
    /// transaction.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(username).await? {
            return Err(AppError::Validation("Username already registered".into()));
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = UserActive {
            username: Set(username.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        DocumentActive {
            title: Set("My First Document".to_owned()),
            content: Set(String::new()),
            owner_id: Set(user.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    /// Removes the user and every document they own, atomically. The FK
    /// carries ON DELETE CASCADE too; deleting children here keeps the
    /// rule at the persistence boundary. No route exposes this.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        Document::delete_many()
            .filter(DocumentColumn::OwnerId.eq(user_id))
            .exec(&txn)
            .await?;
        let res = User::delete_by_id(user_id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
