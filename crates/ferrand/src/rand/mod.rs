mod interface;
mod mutex;
mod shared;
#[cfg(test)]
mod tests;
mod thread;

pub use interface::*;
pub use mutex::*;
pub use shared::*;
pub use thread::*;
