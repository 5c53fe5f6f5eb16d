//! Data shapes shared between the AgriScale backend, its persistence layer and clients

mod inventory;
mod plot;
mod supervisor;
mod task;
mod user;

pub use inventory::{
    InventoryItem, InventoryItemBase, InventoryItemCreate, InventoryUpdate, UpdateError,
};
pub use plot::{Geolocation, Plot, PlotBase, PlotCreate};
pub use supervisor::{Supervisor, SupervisorBase, SupervisorCreate, SupervisorUpdate};
pub use task::{Task, TaskBase, TaskCreate, TaskUpdate, DEFAULT_TASK_STATUS};
pub use user::{CurrentUser, SupervisorPerformance};
