pub mod common;
pub mod company;
pub mod employee;
pub mod links;
pub mod manager;
pub mod workers;

pub use common::*;
pub use company::*;
pub use employee::*;
pub use links::*;
pub use manager::*;
pub use workers::*;
