//! Parsing patterns shared by rule checks

pub mod colors;
