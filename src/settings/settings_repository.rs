use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::app_settings::dsl::*;
use crate::settings::{AppSetting, Settings};
use diesel::prelude::*;
use std::sync::Arc;

// Define the trait for SettingsRepository
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    fn get_setting(&self, setting_key_param: &str) -> Result<String>;
    fn update_setting(&self, setting_key_param: &str, setting_value_param: &str) -> Result<()>;
}

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

// Implement the trait for SettingsRepository
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;
        let all_settings: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(Error::from)?;

        let mut settings = Settings::default();

        for (key, value) in all_settings {
            match key.as_str() {
                "company_name" => settings.company_name = value,
                _ => {} // Ignore unknown settings
            }
        }

        Ok(settings)
    }

    fn get_setting(&self, setting_key_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first(&mut conn);

        match result {
            Ok(value) => Ok(value),
            Err(diesel::result::Error::NotFound) => {
                // Return default values for known settings
                let default_value = match setting_key_param {
                    "company_name" => Settings::default().company_name,
                    _ => return Err(Error::from(diesel::result::Error::NotFound)),
                };
                Ok(default_value)
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    fn update_setting(&self, setting_key_param: &str, setting_value_param: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(AppSetting {
                setting_key: setting_key_param.to_string(),
                setting_value: setting_value_param.to_string(),
            })
            .execute(&mut conn)
            .map_err(Error::from)?;
        Ok(())
    }
}
