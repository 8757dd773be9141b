use diesel::prelude::*;
use diesel::Queryable;
use serde::{Deserialize, Serialize};

/// Application-level settings surfaced to the presentation layer
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub company_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: "Account List".to_string(),
        }
    }
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug)]
#[diesel(table_name = crate::schema::app_settings)]
#[serde(rename_all = "camelCase")]
pub struct AppSetting {
    pub setting_key: String,
    pub setting_value: String,
}
