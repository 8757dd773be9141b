use std::sync::Arc;

use accountlist_core::settings::{
    SettingsRepository, SettingsService, SettingsServiceTrait,
};

mod common;

#[test]
fn company_name_defaults_until_set() {
    let (_dir, pool) = common::setup_test_db();
    let service = SettingsService::new(Arc::new(SettingsRepository::new(pool)));

    assert_eq!(service.get_company_name().unwrap(), "Account List");
    assert_eq!(service.get_settings().unwrap().company_name, "Account List");
}

#[test]
fn company_name_round_trip() {
    let (_dir, pool) = common::setup_test_db();
    let service = SettingsService::new(Arc::new(SettingsRepository::new(pool)));

    service.update_company_name("Contoso Ltd.").unwrap();
    assert_eq!(service.get_company_name().unwrap(), "Contoso Ltd.");

    // Overwrites rather than duplicating the key
    service.update_company_name("Fabrikam Inc.").unwrap();
    assert_eq!(service.get_settings().unwrap().company_name, "Fabrikam Inc.");
}
