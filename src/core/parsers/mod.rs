//! Source file parsing (swc).

pub mod source;
