use sea_orm_migration::prelude::*;

#[derive(Debug, DeriveMigrationName)]
pub(crate) struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Heroes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Heroes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Heroes::Name).string().not_null())
                    .col(ColumnDef::new(Heroes::SuperName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Powers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Powers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Powers::Name).string().not_null())
                    .col(ColumnDef::new(Powers::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeroPowers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroPowers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPowers::Strength).string().not_null())
                    .col(ColumnDef::new(HeroPowers::HeroId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPowers::HeroId)
                            .to(Heroes::Table, Heroes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(HeroPowers::PowerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPowers::PowerId)
                            .to(Powers::Table, Powers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hero_powers_hero_id")
                    .table(HeroPowers::Table)
                    .col(HeroPowers::HeroId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hero_powers_power_id")
                    .table(HeroPowers::Table)
                    .col(HeroPowers::PowerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HeroPowers::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Powers::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Heroes::Table).if_exists().to_owned()).await
    }
}

#[derive(Debug, DeriveIden)]
pub enum Heroes {
    Table,
    Id,
    Name,
    SuperName,
}

#[derive(Debug, DeriveIden)]
pub enum Powers {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Debug, DeriveIden)]
pub enum HeroPowers {
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}
