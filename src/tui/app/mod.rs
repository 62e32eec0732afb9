mod menu;
mod state;

pub use state::{AmountPurpose, AppState, InputAction, Scene};
