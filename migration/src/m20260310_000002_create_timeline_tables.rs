use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    // Null end date means the position is ongoing
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create education table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(150).not_null())
                    .col(ColumnDef::new(Education::Field).string_len(150).not_null())
                    .col(ColumnDef::new(Education::StartDate).date().not_null())
                    .col(ColumnDef::new(Education::EndDate).date())
                    .col(ColumnDef::new(Education::Description).text().not_null())
                    .col(
                        ColumnDef::new(Education::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::LogoUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create interests table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interests::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interests::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Interests::Description).text().not_null())
                    .col(ColumnDef::new(Interests::Icon).string_len(20))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
    Location,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    Description,
    Location,
    LogoUrl,
}

#[derive(DeriveIden)]
enum Interests {
    Table,
    Id,
    Name,
    Description,
    Icon,
}
