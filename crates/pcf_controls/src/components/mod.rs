//! Control implementations

pub mod confirm;
pub mod resize_button;
pub mod size_state;

pub use confirm::{Confirm, ConfirmInputs, ConfirmOutputs};
pub use resize_button::{
    ResizeButton, ResizeButtonInputs, ResizeButtonOutputs, ResizeController, SizeMode,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use size_state::SizeState;
