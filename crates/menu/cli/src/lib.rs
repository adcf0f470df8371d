//! Terminal frontend for the field item menu.
//!
//! This crate renders the widget state from `menu-core` with ratatui and
//! drives the item menu screen's cooperative frame loop: poll one input,
//! update the widgets, draw the world and the animated menu windows, then
//! sleep out the frame budget. Everything is single threaded; the frame
//! clock owns the loop's only suspension point.

pub mod catalog;
pub mod config;
pub mod frame;
pub mod input;
pub mod presentation;
pub mod screen;
pub mod transition;

pub use config::CliConfig;
pub use frame::FrameClock;
pub use input::{InputSource, UiEvent};
pub use screen::{ItemMenuScreen, ScreenContext, ScreenSignal, StatusBar, WorldView};
pub use transition::{TransitionQueue, WidgetSlot};
