//! Core library components.
//!
//! This module contains the environment table abstraction, the per-type
//! parsers and the resolver that ties them together.

pub mod config;
pub mod constants;
pub mod duration;
pub mod parse;
pub mod resolver;
pub mod source;
mod timestamp;
