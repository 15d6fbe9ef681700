//! Example
//!
//! ```rust
//! use sketch_history::controller::Controller;
//! use sketch_history::gui::GuiBuilder;
//! use sketch_history::value::Value;
//! use sketch_history::widgets::{Select, Slider};
//!
//! fn main() -> sketch_history::error::GuiResult<()> {
//!     let mut gui = GuiBuilder::new("generator").build();
//!     gui.add(
//!         Controller::builder("speed", Slider::new(0.0, 10.0, 1.0))
//!             .default_value(5.0)
//!             .build()?,
//!     )?;
//!     gui.add(
//!         Controller::builder("pattern", Select::new(["grid", "spiral"]))
//!             .default_value("grid")
//!             .build()?,
//!     )?;
//!     gui.restore_from_storage()?;
//!
//!     gui.set_value("speed", 7.0)?;
//!     assert_eq!(Some(&Value::Number(7.0)), gui.value("speed"));
//!
//!     gui.undo()?;
//!     assert_eq!(Some(&Value::Number(5.0)), gui.value("speed"));
//!
//!     gui.redo()?;
//!     assert_eq!(Some(&Value::Number(7.0)), gui.value("speed"));
//!     Ok(())
//! }
//! ```
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod gui;
pub mod history;
pub mod randomizer;
pub mod registry;
pub mod shortcut;
pub mod snapshot;
pub mod storage;
pub mod suspend;
pub mod value;
pub mod widgets;
