pub mod traits;
pub mod types;

#[cfg(feature = "std")]
pub mod catch;

#[cfg(feature = "async")]
pub mod async_ext;
