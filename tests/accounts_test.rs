use accountlist_core::accounts::{
    Account, AccountError, AccountQuery, AccountService, AccountServiceTrait, AccountStore,
    AccountUpdate, NewAccount,
};

mod common;

fn new_account(first: &str, last: &str, passport: &str) -> NewAccount {
    NewAccount {
        first_name: first.to_string(),
        last_name: last.to_string(),
        passport_id: passport.to_string(),
    }
}

#[test]
fn create_round_trip() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let jane = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();
    let john = service
        .create_account(new_account("John", "Smith", "P999"))
        .unwrap();

    assert_ne!(jane.id, john.id);

    let all = service.get_all_accounts().unwrap();
    assert_eq!(all.len(), 2);

    let stored = all.iter().find(|a| a.id == john.id).unwrap();
    assert_eq!(stored.first_name, "John");
    assert_eq!(stored.last_name, "Smith");
    assert_eq!(stored.passport_id, "P999");
}

#[test]
fn update_keeps_id_stable() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let created = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();

    let updated = service
        .update_account(AccountUpdate {
            id: Some(created.id),
            first_name: "Janet".to_string(),
            last_name: "Doerr".to_string(),
            passport_id: "P456".to_string(),
        })
        .unwrap();
    assert_eq!(updated.id, created.id);

    let fetched = service.get_account(created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.first_name, "Janet");
    assert_eq!(fetched.last_name, "Doerr");
    assert_eq!(fetched.passport_id, "P456");
}

#[test]
fn delete_removes_the_record_completely() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let jane = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();
    let john = service
        .create_account(new_account("John", "Smith", "P999"))
        .unwrap();

    service.delete_account(jane.id).unwrap();

    let all = service.get_all_accounts().unwrap();
    assert!(all.iter().all(|a| a.id != jane.id));
    assert!(all.iter().any(|a| a.id == john.id));

    assert!(matches!(
        service.get_account(jane.id),
        Err(AccountError::NotFound(_))
    ));
}

#[test]
fn deleting_a_missing_account_is_not_found() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    assert!(matches!(
        service.delete_account(4242),
        Err(AccountError::NotFound(_))
    ));
}

#[test]
fn create_rejects_incomplete_form_before_any_storage_call() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let result = service.create_account(new_account("Jane", "", "P123"));
    assert!(matches!(result, Err(AccountError::InvalidData(_))));

    assert!(service.get_all_accounts().unwrap().is_empty());
}

#[test]
fn insert_then_filter_scenario() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let jane = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();
    let john = service
        .create_account(new_account("John", "Smith", "P999"))
        .unwrap();
    assert_ne!(john.id, jane.id);

    let all = service.get_all_accounts().unwrap();
    assert_eq!(all.len(), 2);

    let matched = service
        .search_accounts(&AccountQuery {
            first_name: "Jo.*".to_string(),
            last_name: String::new(),
            passport_id: String::new(),
        })
        .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, john.id);
    assert_eq!(matched[0].first_name, "John");
}

#[test]
fn update_passport_scenario() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let jane = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();

    service
        .update_account(AccountUpdate {
            id: Some(jane.id),
            first_name: jane.first_name.clone(),
            last_name: jane.last_name.clone(),
            passport_id: "P000".to_string(),
        })
        .unwrap();

    let fetched = service.get_account(jane.id).unwrap();
    assert_eq!(fetched.passport_id, "P000");
    assert_eq!(fetched.id, jane.id);
}

#[test]
fn empty_patterns_return_the_full_set() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();
    service
        .create_account(new_account("John", "Smith", "P999"))
        .unwrap();

    let matched = service.search_accounts(&AccountQuery::default()).unwrap();
    assert_eq!(matched.len(), 2);
}

#[test]
fn malformed_pattern_aborts_the_search() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool);

    let result = service.search_accounts(&AccountQuery {
        first_name: "[unclosed".to_string(),
        last_name: String::new(),
        passport_id: String::new(),
    });
    assert!(matches!(result, Err(AccountError::InvalidPattern(_))));
}

#[test]
fn staged_changes_have_no_effect_until_flush() {
    let (_dir, pool) = common::setup_test_db();

    let mut store = AccountStore::open(&pool).unwrap();
    store
        .stage_insert(new_account("Jane", "Doe", "P123"))
        .unwrap();
    assert_eq!(store.pending_count(), 1);
    assert!(store.fetch_all().unwrap().is_empty());

    let inserted = store.flush().unwrap();
    assert_eq!(inserted.len(), 1);
    assert!(inserted[0].id > 0);
    assert_eq!(store.pending_count(), 0);
    assert_eq!(store.fetch_all().unwrap().len(), 1);
}

#[test]
fn failed_flush_commits_nothing() {
    let (_dir, pool) = common::setup_test_db();

    let seeded = {
        let mut store = AccountStore::open(&pool).unwrap();
        store
            .stage_insert(new_account("Jane", "Doe", "P123"))
            .unwrap();
        store.flush().unwrap().pop().unwrap()
    };

    let mut store = AccountStore::open(&pool).unwrap();
    store
        .stage_insert(new_account("John", "Smith", "P999"))
        .unwrap();
    // Deleting a row that does not exist fails the whole flush
    store.stage_delete(&Account {
        id: seeded.id + 1000,
        ..seeded.clone()
    });

    assert!(store.flush().is_err());
    // Staged changes remain unapplied and uncommitted
    assert_eq!(store.pending_count(), 2);

    let all = store.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, seeded.id);
}

#[test]
fn fetch_by_id_returns_the_authoritative_row() {
    let (_dir, pool) = common::setup_test_db();
    let service = AccountService::new(pool.clone());

    let jane = service
        .create_account(new_account("Jane", "Doe", "P123"))
        .unwrap();

    // A stale snapshot of the record does not affect what the store resolves
    let mut store = AccountStore::open(&pool).unwrap();
    let fetched = store.fetch_by_id(jane.id).unwrap();
    assert_eq!(fetched, jane);

    assert!(matches!(
        store.fetch_by_id(jane.id + 1),
        Err(AccountError::NotFound(_))
    ));
}
