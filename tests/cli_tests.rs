//! CLI command tests against a database that cannot be opened
//!
//! Analysis commands must still print results; only the commands that read
//! the store fail.

use tempfile::TempDir;

use newslens::cli::{Commands, DocumentArgs};
use newslens::config::{StaticConfig, set_config};
use newslens::interfaces::cli::{CliError, run_cli_command};
use newslens::runtime::lifetime::startup::prepare_startup;

const ARTICLE: &str = "Qeveria njoftoi një fitore të madhe për ekonominë. \
    Ministri tha se rezultatet janë shumë të mira. \
    Opozita kërkoi më shumë transparencë.";

/// 指向一个不存在的目录，SQLite 无法创建数据库文件
fn setup_unopenable_database() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("missing").join("sub").join("news.db");

    let mut config = StaticConfig::default();
    config.database.database_url = format!("sqlite://{}", db_path.display());
    set_config(config);
    temp_dir
}

fn text_document() -> DocumentArgs {
    DocumentArgs {
        text: Some(ARTICLE.to_string()),
        url: None,
    }
}

#[tokio::test]
async fn test_startup_degrades_to_unavailable_store() {
    let _temp_dir = setup_unopenable_database();

    let context = prepare_startup().await;
    assert!(!context.storage_available());
    assert_eq!(context.store.name(), "unavailable");
    assert!(context.store.count().await.is_err());
}

#[tokio::test]
async fn test_analysis_commands_run_without_database() {
    let _temp_dir = setup_unopenable_database();

    run_cli_command(Commands::Summarize {
        document: text_document(),
    })
    .await
    .unwrap();

    run_cli_command(Commands::Analyze {
        document: text_document(),
        channel: None,
        no_save: true,
    })
    .await
    .unwrap();

    // 保存失败只记录日志，结果照常输出
    run_cli_command(Commands::Analyze {
        document: text_document(),
        channel: Some("RTK".to_string()),
        no_save: false,
    })
    .await
    .unwrap();

    run_cli_command(Commands::Stats).await.unwrap();
}

#[tokio::test]
async fn test_history_reports_storage_error() {
    let _temp_dir = setup_unopenable_database();

    let err = run_cli_command(Commands::History { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::StorageError(_)));
}
