pub mod address;
pub mod interface;
pub mod mask;
pub mod topology;
