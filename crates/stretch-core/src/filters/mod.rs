pub mod bounds;
pub mod histogram;
pub mod remap;
