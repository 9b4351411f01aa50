use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profile table (singleton row, fixed id "main")
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profile::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Profile::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Profile::Bio).text().not_null())
                    .col(ColumnDef::new(Profile::Email).string_len(254).not_null())
                    .col(ColumnDef::new(Profile::Phone).string_len(50).not_null())
                    .col(ColumnDef::new(Profile::Location).string_len(150).not_null())
                    .col(ColumnDef::new(Profile::Github).text().not_null())
                    .col(ColumnDef::new(Profile::Linkedin).text().not_null())
                    .col(ColumnDef::new(Profile::Website).text().not_null())
                    .col(ColumnDef::new(Profile::ImageUrl).text().not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Projects::DemoUrl).text())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::DetailedDescription).text())
                    .col(ColumnDef::new(Projects::Role).string_len(150))
                    .col(ColumnDef::new(Projects::Contribution).text())
                    .col(
                        ColumnDef::new(Projects::AdditionalImages)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::Features).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Challenges).text())
                    .col(ColumnDef::new(Projects::Duration).string_len(100))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create skill_categories table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SkillCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillCategories::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    // Display order; uniqueness is by convention, not enforced
                    .col(
                        ColumnDef::new(SkillCategories::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create skills table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Icon).string_len(50))
                    .col(ColumnDef::new(Skills::IconUrl).text())
                    .col(ColumnDef::new(Skills::SortOrder).integer())
                    .to_owned(),
            )
            .await?;

        // Skills are grouped by category name at render time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_skills_category")
                    .table(Skills::Table)
                    .col(Skills::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SkillCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    Github,
    Linkedin,
    Website,
    ImageUrl,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    ImageUrl,
    DemoUrl,
    GithubUrl,
    DetailedDescription,
    Role,
    Contribution,
    AdditionalImages,
    Features,
    Challenges,
    Duration,
}

#[derive(DeriveIden)]
enum SkillCategories {
    Table,
    Id,
    Name,
    SortOrder,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Icon,
    IconUrl,
    SortOrder,
}
