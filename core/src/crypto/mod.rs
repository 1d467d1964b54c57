pub mod cipher;
pub mod kdf;

pub use cipher::*;
pub use kdf::*;
