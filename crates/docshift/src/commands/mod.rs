pub mod common;
pub mod relocate;

pub use common::RelocateOptions;
pub use relocate::Relocate;
