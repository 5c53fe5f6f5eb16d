use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SupervisorBase {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub assigned_plots: Vec<String>,
    #[serde(default)]
    pub field_manager_id: Option<String>,
    /// Object key returned by the photo upload grant
    #[serde(default)]
    pub photo_url: Option<String>,
}

pub type SupervisorCreate = SupervisorBase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Supervisor {
    pub id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub base: SupervisorBase,
}

/// Partial update, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SupervisorUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub assigned_plots: Option<Vec<String>>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Supervisor {
    /// Merges the provided fields of `update` into this supervisor
    pub fn apply_update(&mut self, update: SupervisorUpdate) {
        let base = &mut self.base;

        if let Some(name) = update.name {
            base.name = name;
        }
        if let Some(email) = update.email {
            base.email = email;
        }
        if let Some(phone) = update.phone {
            base.phone = phone;
        }
        if let Some(assigned_plots) = update.assigned_plots {
            base.assigned_plots = assigned_plots;
        }
        if let Some(photo_url) = update.photo_url {
            base.photo_url = Some(photo_url);
        }
    }
}
