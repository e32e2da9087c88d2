//! Integration tests for Budget repository.
//!
//! Each test runs against its own migrated in-memory SQLite database.

use rstest::rstest;
use sea_orm::DatabaseConnection;
use tally_core::budget::{BudgetItem, BudgetRecord, BudgetType, YearStatsQuery};
use tally_db::{
    AuthorRepository, BudgetError, BudgetRepository, connect,
    migration::{Migrator, MigratorTrait},
};
use tally_shared::config::DatabaseConfig;

/// Connect to a fresh in-memory database and run migrations.
async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

fn record(
    year: i32,
    month: i32,
    amount: i32,
    budget_type: BudgetType,
    author_id: Option<i32>,
) -> BudgetRecord {
    BudgetRecord {
        year,
        month,
        amount,
        budget_type,
        author_id,
    }
}

/// Seeds (2020, 1, 100, Income, John Smith), (2020, 1, 50, Expense, John Smith),
/// (2020, 5, 200, Income, no author) and returns the repository.
async fn seed_scenario(db: &DatabaseConnection) -> BudgetRepository {
    let author = AuthorRepository::new(db.clone())
        .create("John Smith")
        .await
        .expect("Failed to create author");
    let repo = BudgetRepository::new(db.clone());

    for candidate in [
        record(2020, 1, 100, BudgetType::Income, Some(author.id)),
        record(2020, 1, 50, BudgetType::Expense, Some(author.id)),
        record(2020, 5, 200, BudgetType::Income, None),
    ] {
        repo.add_record(candidate)
            .await
            .expect("Failed to add record");
    }

    repo
}

fn month_amount(items: &[BudgetItem]) -> Vec<(i32, i32)> {
    items.iter().map(|item| (item.month, item.amount)).collect()
}

#[tokio::test]
async fn test_add_record_with_author() {
    let db = setup_db().await;
    let author = AuthorRepository::new(db.clone())
        .create("Jane Doe")
        .await
        .expect("Failed to create author");
    let repo = BudgetRepository::new(db.clone());

    let response = repo
        .add_record(record(2021, 3, 750, BudgetType::Commission, Some(author.id)))
        .await
        .expect("Failed to add record");

    assert!(response.id > 0);
    assert_eq!(response.year, 2021);
    assert_eq!(response.month, 3);
    assert_eq!(response.amount, 750);
    assert_eq!(response.budget_type, BudgetType::Commission);
    assert_eq!(response.author_id, Some(author.id));
    assert_eq!(response.author_name.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_add_record_without_author() {
    let db = setup_db().await;
    let repo = BudgetRepository::new(db.clone());

    let first = repo
        .add_record(record(2021, 1, 10, BudgetType::Income, None))
        .await
        .expect("Failed to add record");
    let second = repo
        .add_record(record(2021, 1, 10, BudgetType::Income, None))
        .await
        .expect("Failed to add record");

    assert!(first.author_id.is_none());
    assert!(first.author_name.is_none());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_add_record_is_visible_in_year_stats() {
    let db = setup_db().await;
    let repo = BudgetRepository::new(db.clone());

    repo.add_record(record(2022, 7, 42, BudgetType::Expense, None))
        .await
        .expect("Failed to add record");

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2022))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.total_by_type.get("Expense"), Some(&42));
    assert_eq!(month_amount(&stats.items), vec![(7, 42)]);
}

#[tokio::test]
async fn test_add_record_unknown_author_is_storage_error() {
    let db = setup_db().await;
    let repo = BudgetRepository::new(db.clone());

    let result = repo
        .add_record(record(2020, 1, 100, BudgetType::Income, Some(9999)))
        .await;

    assert!(matches!(result, Err(BudgetError::Storage(_))));

    // The failed insert left nothing behind
    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020))
        .await
        .expect("Query should succeed");
    assert_eq!(stats.total, 0);
}

#[tokio::test]
async fn test_year_stats_full_page() {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_page(10, 0))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_by_type.len(), 2);
    assert_eq!(stats.total_by_type["Income"], 300);
    assert_eq!(stats.total_by_type["Expense"], 50);
    assert_eq!(
        month_amount(&stats.items),
        vec![(1, 100), (1, 50), (5, 200)]
    );
    assert_eq!(stats.items[0].author_name.as_deref(), Some("John Smith"));
    assert_eq!(stats.items[2].author_name, None);
}

#[tokio::test]
async fn test_year_stats_second_page() {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_page(1, 1))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_by_type["Income"], 300);
    assert_eq!(stats.total_by_type["Expense"], 50);
    assert_eq!(month_amount(&stats.items), vec![(1, 50)]);
    assert_eq!(stats.items[0].budget_type, BudgetType::Expense);
}

#[tokio::test]
async fn test_year_stats_no_matches() {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2021))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 0);
    assert!(stats.total_by_type.is_empty());
    assert!(stats.items.is_empty());
}

#[rstest]
#[case(10, 0)]
#[case(1, 0)]
#[case(1, 1)]
#[case(2, 1)]
#[case(1, 2)]
#[case(5, 3)]
#[case(10, 100)]
#[tokio::test]
async fn test_year_stats_aggregates_ignore_pagination(#[case] limit: u64, #[case] offset: u64) {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_page(limit, offset))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_by_type.values().sum::<i64>(), 350);
    assert_eq!(
        stats.items.len() as u64,
        stats.total.saturating_sub(offset).min(limit)
    );
}

#[rstest]
#[case("John Smith")]
#[case("john smith")]
#[case("JOHN SMITH")]
#[tokio::test]
async fn test_year_stats_author_filter_is_case_insensitive(#[case] author: &str) {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_author(author))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.total_by_type["Income"], 100);
    assert_eq!(stats.total_by_type["Expense"], 50);
    assert_eq!(month_amount(&stats.items), vec![(1, 100), (1, 50)]);
    assert!(
        stats
            .items
            .iter()
            .all(|item| item.author_name.as_deref() == Some("John Smith"))
    );
}

#[rstest]
#[case("Иван Петров")]
#[case("Müller Łukasz")]
#[tokio::test]
async fn test_year_stats_author_filter_matches_non_ascii_name(#[case] full_name: &str) {
    let db = setup_db().await;
    let author = AuthorRepository::new(db.clone())
        .create(full_name)
        .await
        .expect("Failed to create author");
    let repo = BudgetRepository::new(db.clone());
    repo.add_record(record(2020, 2, 70, BudgetType::Expense, Some(author.id)))
        .await
        .expect("Failed to add record");

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_author(full_name))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.total_by_type["Expense"], 70);
    assert_eq!(stats.items[0].author_name.as_deref(), Some(full_name));
}

#[tokio::test]
async fn test_year_stats_empty_author_includes_records_without_author() {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let unfiltered = repo
        .get_year_stats(&YearStatsQuery::for_year(2020))
        .await
        .expect("Query should succeed");
    let empty_filter = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_author(""))
        .await
        .expect("Query should succeed");

    assert_eq!(unfiltered, empty_filter);
    assert!(unfiltered.items.iter().any(|item| item.author_name.is_none()));
}

#[tokio::test]
async fn test_year_stats_unknown_author_matches_nothing() {
    let db = setup_db().await;
    let repo = seed_scenario(&db).await;

    let stats = repo
        .get_year_stats(&YearStatsQuery::for_year(2020).with_author("Nobody"))
        .await
        .expect("Query should succeed");

    assert_eq!(stats.total, 0);
    assert!(stats.total_by_type.is_empty());
    assert!(stats.items.is_empty());
}

#[tokio::test]
async fn test_year_stats_pages_concatenate_to_full_listing() {
    let db = setup_db().await;
    let repo = BudgetRepository::new(db.clone());

    let amounts = [
        (3, 30, BudgetType::Income),
        (1, 10, BudgetType::Expense),
        (12, 5, BudgetType::Commission),
        (3, 90, BudgetType::Expense),
        (1, 10, BudgetType::Income),
        (6, 60, BudgetType::Income),
        (3, 30, BudgetType::Commission),
    ];
    for (month, amount, budget_type) in amounts {
        repo.add_record(record(2019, month, amount, budget_type, None))
            .await
            .expect("Failed to add record");
    }
    // Other years never leak into the statistics
    repo.add_record(record(2018, 1, 1000, BudgetType::Income, None))
        .await
        .expect("Failed to add record");

    let full = repo
        .get_year_stats(&YearStatsQuery::for_year(2019))
        .await
        .expect("Query should succeed");

    assert_eq!(full.total, 7);
    assert_eq!(full.total_by_type["Income"], 100);
    assert_eq!(full.total_by_type["Expense"], 100);
    assert_eq!(full.total_by_type["Commission"], 35);
    assert_eq!(
        full.total_by_type.values().sum::<i64>(),
        full.items.iter().map(|item| i64::from(item.amount)).sum::<i64>()
    );
    for pair in full.items.windows(2) {
        assert!(pair[0].month <= pair[1].month);
        if pair[0].month == pair[1].month {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    let mut paged = Vec::new();
    for offset in (0..7).step_by(3) {
        let page = repo
            .get_year_stats(&YearStatsQuery::for_year(2019).with_page(3, offset))
            .await
            .expect("Query should succeed");
        assert_eq!(page.total, full.total);
        assert_eq!(page.total_by_type, full.total_by_type);
        paged.extend(page.items);
    }

    assert_eq!(paged, full.items);
}
