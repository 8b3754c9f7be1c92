mod arity;
mod choice;
mod date;
mod descriptor;
mod interface;
mod number;

pub use arity::*;
pub use choice::*;
pub use date::*;
pub use descriptor::*;
pub use interface::*;
pub use number::*;
