pub mod inventory;
pub mod state;

pub use inventory::{Inventory, InventorySnapshot};
pub use state::{Injury, StateVector};
