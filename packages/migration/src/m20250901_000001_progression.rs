use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameParticipants {
    Table,
    Id,
    GameId,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Text,
    Kind,
    Options,
    AllowOther,
    Sensitivity,
    MaxOptions,
    CreatedAt,
}

#[derive(Iden)]
enum Answers {
    Table,
    Id,
    GameId,
    QuestionId,
    UserId,
    AboutUserId,
    Text,
    IsCorrect,
    CreatedAt,
}

#[derive(Iden)]
enum AwardedBadges {
    Table,
    Id,
    UserId,
    GameId,
    BadgeId,
    CreatedAt,
}

#[derive(Iden)]
enum PointsLedger {
    Table,
    Id,
    UserId,
    GameId,
    Points,
    UpdatedAt,
}

#[derive(Iden)]
enum GameUserStates {
    Table,
    Id,
    GameId,
    UserId,
    Screen,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameUserFlags {
    Table,
    Id,
    GameId,
    UserId,
    Flag,
    CreatedAt,
}

#[derive(Iden)]
enum ScreenVisits {
    Table,
    Id,
    GameId,
    UserId,
    ScreenName,
    CreatedAt,
}

fn id_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn ts_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(id_col(Games::Id))
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::CreatedBy).big_integer().not_null())
                    .col(ts_col(Games::CreatedAt))
                    .col(ts_col(Games::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // game_participants
        manager
            .create_table(
                Table::create()
                    .table(GameParticipants::Table)
                    .if_not_exists()
                    .col(id_col(GameParticipants::Id))
                    .col(
                        ColumnDef::new(GameParticipants::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameParticipants::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ts_col(GameParticipants::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participants_game_id")
                            .from(GameParticipants::Table, GameParticipants::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_participants_game_user")
                    .table(GameParticipants::Table)
                    .col(GameParticipants::GameId)
                    .col(GameParticipants::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // questions
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(id_col(Questions::Id))
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(
                        ColumnDef::new(Questions::Kind)
                            .string()
                            .not_null()
                            .default("free_form"),
                    )
                    .col(ColumnDef::new(Questions::Options).json().null())
                    .col(
                        ColumnDef::new(Questions::AllowOther)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Questions::Sensitivity)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Questions::MaxOptions).small_integer().null())
                    .col(ts_col(Questions::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // answers
        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(id_col(Answers::Id))
                    .col(ColumnDef::new(Answers::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::QuestionId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::AboutUserId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::Text).text().not_null())
                    .col(ColumnDef::new(Answers::IsCorrect).boolean().null())
                    .col(ts_col(Answers::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_game_id")
                            .from(Answers::Table, Answers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_question_id")
                            .from(Answers::Table, Answers::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_answers_game_question_about")
                    .table(Answers::Table)
                    .col(Answers::GameId)
                    .col(Answers::QuestionId)
                    .col(Answers::AboutUserId)
                    .to_owned(),
            )
            .await?;

        // one answer per (user, question, target) in a game
        manager
            .create_index(
                Index::create()
                    .name("ux_answers_game_question_user_about")
                    .table(Answers::Table)
                    .col(Answers::GameId)
                    .col(Answers::QuestionId)
                    .col(Answers::UserId)
                    .col(Answers::AboutUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // awarded_badges: the unique index is what actually prevents double awards
        manager
            .create_table(
                Table::create()
                    .table(AwardedBadges::Table)
                    .if_not_exists()
                    .col(id_col(AwardedBadges::Id))
                    .col(ColumnDef::new(AwardedBadges::UserId).big_integer().not_null())
                    .col(ColumnDef::new(AwardedBadges::GameId).big_integer().not_null())
                    .col(ColumnDef::new(AwardedBadges::BadgeId).string().not_null())
                    .col(ts_col(AwardedBadges::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_awarded_badges_user_game_badge")
                    .table(AwardedBadges::Table)
                    .col(AwardedBadges::UserId)
                    .col(AwardedBadges::GameId)
                    .col(AwardedBadges::BadgeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // points_ledger
        manager
            .create_table(
                Table::create()
                    .table(PointsLedger::Table)
                    .if_not_exists()
                    .col(id_col(PointsLedger::Id))
                    .col(ColumnDef::new(PointsLedger::UserId).big_integer().not_null())
                    .col(ColumnDef::new(PointsLedger::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(PointsLedger::Points)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ts_col(PointsLedger::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_points_ledger_user_game")
                    .table(PointsLedger::Table)
                    .col(PointsLedger::UserId)
                    .col(PointsLedger::GameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game_user_states
        manager
            .create_table(
                Table::create()
                    .table(GameUserStates::Table)
                    .if_not_exists()
                    .col(id_col(GameUserStates::Id))
                    .col(ColumnDef::new(GameUserStates::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GameUserStates::UserId).big_integer().not_null())
                    .col(ColumnDef::new(GameUserStates::Screen).json().not_null())
                    .col(ColumnDef::new(GameUserStates::Metadata).json().null())
                    .col(ts_col(GameUserStates::CreatedAt))
                    .col(ts_col(GameUserStates::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_user_states_game_user")
                    .table(GameUserStates::Table)
                    .col(GameUserStates::GameId)
                    .col(GameUserStates::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game_user_flags
        manager
            .create_table(
                Table::create()
                    .table(GameUserFlags::Table)
                    .if_not_exists()
                    .col(id_col(GameUserFlags::Id))
                    .col(ColumnDef::new(GameUserFlags::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GameUserFlags::UserId).big_integer().not_null())
                    .col(ColumnDef::new(GameUserFlags::Flag).string().not_null())
                    .col(ts_col(GameUserFlags::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_user_flags_game_user_flag")
                    .table(GameUserFlags::Table)
                    .col(GameUserFlags::GameId)
                    .col(GameUserFlags::UserId)
                    .col(GameUserFlags::Flag)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // screen_visits (append-only activity log)
        manager
            .create_table(
                Table::create()
                    .table(ScreenVisits::Table)
                    .if_not_exists()
                    .col(id_col(ScreenVisits::Id))
                    .col(ColumnDef::new(ScreenVisits::GameId).big_integer().not_null())
                    .col(ColumnDef::new(ScreenVisits::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ScreenVisits::ScreenName).string().not_null())
                    .col(ts_col(ScreenVisits::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScreenVisits::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_game_user_flags_game_user_flag")
                    .table(GameUserFlags::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GameUserFlags::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_game_user_states_game_user")
                    .table(GameUserStates::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GameUserStates::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_points_ledger_user_game")
                    .table(PointsLedger::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(PointsLedger::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_awarded_badges_user_game_badge")
                    .table(AwardedBadges::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(AwardedBadges::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_answers_game_question_user_about")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ix_answers_game_question_about")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_game_participants_game_user")
                    .table(GameParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GameParticipants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}
