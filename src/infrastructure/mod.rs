//! Adapters for the input port: terminal and script-file line readers, plus
//! scripted in-memory doubles.

pub mod in_memory;
pub mod lines;
