// wordveil/src/lib.rs
//! # Wordveil CLI Application
//!
//! This crate provides the command-line interface for the wordveil
//! obfuscation engine. All substitution logic lives in `wordveil-core`;
//! this crate only handles argument parsing, I/O, and logging.

pub mod cli;
pub mod commands;
pub mod logger;
