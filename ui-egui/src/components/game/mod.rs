// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game-related UI components

mod controls;
mod status;

pub use controls::{ControlAction, GameControls};
pub use status::StatusPanel;
