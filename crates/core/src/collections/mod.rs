//! Collection types shared by the registries and text utilities.

pub mod caseless_map;

pub use caseless_map::{CaselessMap, fold_key};
