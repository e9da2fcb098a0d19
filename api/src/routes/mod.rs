//! Route handlers
//!
//! One module per resource; the phone module also owns the shared
//! application state handed to every handler.

pub mod phone;

pub use phone::AppState;
