use super::settings_repository::SettingsRepositoryTrait;
use crate::errors::Result;
use crate::settings::Settings;
use std::sync::Arc;

// Define the trait for SettingsService
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    fn get_company_name(&self) -> Result<String>;
    fn update_company_name(&self, new_company_name: &str) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

// Implement the trait for SettingsService
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    /// Display label shown by the presentation layer, loaded once at startup
    fn get_company_name(&self) -> Result<String> {
        self.settings_repository.get_setting("company_name")
    }

    fn update_company_name(&self, new_company_name: &str) -> Result<()> {
        self.settings_repository
            .update_setting("company_name", new_company_name)
    }
}
