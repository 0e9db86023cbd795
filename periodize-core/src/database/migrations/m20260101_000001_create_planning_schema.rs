use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Plans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Plans::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Plans::Title).string().not_null())
                    .col(ColumnDef::new(Plans::CreatedById).string().not_null())
                    .col(ColumnDef::new(Plans::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plans_created_by_id")
                            .from(Plans::Table, Plans::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Phases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Phases::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Phases::Title).string().not_null())
                    .col(ColumnDef::new(Phases::Description).text().null())
                    .col(ColumnDef::new(Phases::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Phases::PlanId).string().not_null())
                    .col(ColumnDef::new(Phases::CreatedById).string().not_null())
                    .col(ColumnDef::new(Phases::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phases_plan_id")
                            .from(Phases::Table, Phases::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phases_created_by_id")
                            .from(Phases::Table, Phases::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Weeks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Weeks::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Weeks::Title).string().not_null())
                    .col(ColumnDef::new(Weeks::Description).text().null())
                    .col(ColumnDef::new(Weeks::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Weeks::PhaseId).string().not_null())
                    .col(ColumnDef::new(Weeks::CreatedById).string().not_null())
                    .col(ColumnDef::new(Weeks::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weeks_phase_id")
                            .from(Weeks::Table, Weeks::PhaseId)
                            .to(Phases::Table, Phases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weeks_created_by_id")
                            .from(Weeks::Table, Weeks::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sessions::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Sessions::Title).string().not_null())
                    .col(ColumnDef::new(Sessions::Description).text().null())
                    .col(ColumnDef::new(Sessions::Purpose).text().null())
                    .col(ColumnDef::new(Sessions::Day).integer().not_null())
                    .col(ColumnDef::new(Sessions::WeekId).string().not_null())
                    .col(ColumnDef::new(Sessions::CreatedById).string().not_null())
                    .col(ColumnDef::new(Sessions::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_week_id")
                            .from(Sessions::Table, Sessions::WeekId)
                            .to(Weeks::Table, Weeks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_created_by_id")
                            .from(Sessions::Table, Sessions::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Relation lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_plans_created_by_id")
                    .table(Plans::Table)
                    .col(Plans::CreatedById)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_phases_plan_id")
                    .table(Phases::Table)
                    .col(Phases::PlanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weeks_phase_id")
                    .table(Weeks::Table)
                    .col(Weeks::PhaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_week_id")
                    .table(Sessions::Table)
                    .col(Sessions::WeekId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Weeks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Phases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Plans {
    Table,
    Id,
    Title,
    CreatedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Phases {
    Table,
    Id,
    Title,
    Description,
    SortOrder,
    PlanId,
    CreatedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Weeks {
    Table,
    Id,
    Title,
    Description,
    SortOrder,
    PhaseId,
    CreatedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
    Title,
    Description,
    Purpose,
    Day,
    WeekId,
    CreatedById,
    CreatedAt,
}
