//! 分析记录表迁移
//!
//! 创建 analysis_records 表，每次提交分析写入一行：
//! - 原文、摘要、关键词
//! - 情感标签、国家标签、频道
//! - 创建时间（排序与按月聚合的唯一依据）

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalysisRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnalysisRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AnalysisRecords::Text).text().not_null())
                    .col(
                        ColumnDef::new(AnalysisRecords::Country)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnalysisRecords::Sentiment)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AnalysisRecords::Keywords).text().not_null())
                    .col(ColumnDef::new(AnalysisRecords::Summary).text().not_null())
                    .col(
                        ColumnDef::new(AnalysisRecords::Channel)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AnalysisRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 created_at 索引（用于历史排序和按月统计）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analysis_records_created_at")
                    .table(AnalysisRecords::Table)
                    .col(AnalysisRecords::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_analysis_records_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AnalysisRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AnalysisRecords {
    #[sea_orm(iden = "analysis_records")]
    Table,
    Id,
    Text,
    Country,
    Sentiment,
    Keywords,
    Summary,
    Channel,
    CreatedAt,
}
