#[macro_use]
pub mod console;
#[macro_use]
pub mod safety;
