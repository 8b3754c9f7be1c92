#![doc = include_str!("../README.md")]

mod error;
mod function;
mod rand;
mod registry;
mod time;

pub use crate::error::*;
pub use crate::function::*;
pub use crate::rand::*;
pub use crate::registry::*;
pub use crate::time::*;
