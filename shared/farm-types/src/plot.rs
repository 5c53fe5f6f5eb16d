use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Geolocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlotBase {
    #[validate(length(min = 1))]
    pub name: String,
    pub plot_number: String,
    #[validate(nested)]
    pub geolocation: Geolocation,
    #[serde(default)]
    pub supervisor_id: Option<String>,
    #[serde(default)]
    pub field_manager_id: Option<String>,
}

pub type PlotCreate = PlotBase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Plot {
    pub id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub base: PlotBase,
}
