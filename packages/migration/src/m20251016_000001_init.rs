use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Username,
    Forename,
    Surname,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Contests {
    Table,
    Id,
    Opponent,
    Location,
    Timestamp,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ScoreEntries {
    Table,
    Id,
    PlayerId,
    ContestId,
    TurnNumber,
    ScoreValue,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::Username).string_len(64).not_null())
                    .col(ColumnDef::new(Players::Forename).string_len(64).null())
                    .col(ColumnDef::new(Players::Surname).string_len(64).null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_username")
                    .table(Players::Table)
                    .col(Players::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // contests
        manager
            .create_table(
                Table::create()
                    .table(Contests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contests::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Contests::Opponent).string_len(64).not_null())
                    .col(ColumnDef::new(Contests::Location).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Contests::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_contests_timestamp")
                    .table(Contests::Table)
                    .col(Contests::Timestamp)
                    .to_owned(),
            )
            .await?;

        // score_entries: the payload-bearing join between players and contests.
        // Foreign keys restrict deletes; the ledger removes entries before the contest.
        manager
            .create_table(
                Table::create()
                    .table(ScoreEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScoreEntries::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::ContestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::TurnNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::ScoreValue)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_entries_player_id")
                            .from(ScoreEntries::Table, ScoreEntries::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_entries_contest_id")
                            .from(ScoreEntries::Table, ScoreEntries::ContestId)
                            .to(Contests::Table, Contests::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_score_entries_contest_id")
                    .table(ScoreEntries::Table)
                    .col(ScoreEntries::ContestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_score_entries_player_contest_turn")
                    .table(ScoreEntries::Table)
                    .col(ScoreEntries::PlayerId)
                    .col(ScoreEntries::ContestId)
                    .col(ScoreEntries::TurnNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_score_entries_player_contest_turn")
                    .table(ScoreEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_score_entries_contest_id")
                    .table(ScoreEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScoreEntries::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_contests_timestamp")
                    .table(Contests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contests::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_players_username")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        Ok(())
    }
}
