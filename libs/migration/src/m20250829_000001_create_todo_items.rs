use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(pk_uuid(TodoItems::Id))
                    .col(text(TodoItems::Description))
                    .col(boolean(TodoItems::IsCompleted).default(false))
                    .to_owned(),
            )
            .await?;

        // Description uniqueness among incomplete items is enforced by the
        // service layer, not by a database constraint.
        manager
            .create_index(
                Index::create()
                    .name("idx_todo_items_is_completed")
                    .table(TodoItems::Table)
                    .col(TodoItems::IsCompleted)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodoItems {
    Table,
    Id,
    Description,
    IsCompleted,
}
