use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::entity;
use crate::error::{TodoError, TodoResult};
use crate::models::TodoItem;
use crate::repository::TodoRepository;

/// PostgreSQL implementation of [`TodoRepository`] backed by SeaORM.
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn insert(&self, item: TodoItem) -> TodoResult<u64> {
        let item_id = item.id;
        let active_model: entity::ActiveModel = item.into();

        let rows = entity::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;

        tracing::info!(item_id = %item_id, "Created todo item");
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> TodoResult<Option<TodoItem>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_incomplete(&self) -> TodoResult<Vec<TodoItem>> {
        let models = entity::Entity::find()
            .filter(entity::Column::IsCompleted.eq(false))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn replace(&self, item: TodoItem) -> TodoResult<()> {
        let item_id = item.id;
        let active_model: entity::ActiveModel = item.into();

        // An UPDATE that matches no row surfaces as RecordNotUpdated: the
        // row was deleted (or never existed) between read and write. The
        // service re-checks existence to classify it.
        entity::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => TodoError::Conflict(item_id),
                other => TodoError::from(other),
            })?;

        tracing::info!(item_id = %item_id, "Updated todo item");
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> TodoResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn incomplete_description_exists(&self, description: &str) -> TodoResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::IsCompleted.eq(false))
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Description)))
                    .eq(description.to_lowercase()),
            )
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
