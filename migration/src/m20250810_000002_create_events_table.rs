use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Events::Description).text())
                    // Canonical "YYYY-MM-DD HH:MM:SS"; legacy rows may carry
                    // other shapes and are parsed leniently on read.
                    .col(
                        ColumnDef::new(Events::EventDatetime)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Location).string_len(200))
                    .col(ColumnDef::new(Events::CreatedBy).uuid())
                    .col(
                        ColumnDef::new(Events::VisibleToAll)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_created_by")
                            .from(Events::Table, Events::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // The visibility filter always scans (visible_to_all OR created_by)
        // ordered by event_datetime.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_events_datetime
                ON events (event_datetime ASC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_events_created_by
                ON events (created_by);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_events_datetime;
                DROP INDEX IF EXISTS idx_events_created_by;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    EventDatetime,
    Location,
    CreatedBy,
    VisibleToAll,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
