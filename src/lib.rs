// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together to run the interactive menu.
//
// Module responsibilities:
// - `values`: the list of integers plus the sort and search routines.
// - `console`: line-oriented prompting, either on a real terminal or
//   from a scripted list of lines.
// - `ui`: the menu loop and the input / sort / search flows.
// - `error`, `config`, `logger`: ambient plumbing for the binary.
//
// Keeping the console behind a trait lets the whole menu be driven from
// tests without a terminal attached.
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod ui;
pub mod values;
