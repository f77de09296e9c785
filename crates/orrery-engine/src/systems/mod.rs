pub mod color;
#[cfg(feature = "vectors")]
pub mod vector;
