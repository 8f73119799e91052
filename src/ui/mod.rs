//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer reads the controller's offset and turns it into cells on the
//! terminal.  It never writes to the controller.

pub mod layout;
pub mod sheet_widget;
pub mod spinner;
pub mod theme;
