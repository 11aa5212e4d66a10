//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, TuiHost, run_tui};
