//! Presenters: the console front panel and a JSON-lines event stream.

pub mod console;
pub mod json;
