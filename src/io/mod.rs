pub mod csv;
pub mod stream;

#[cfg_attr(docsrs, doc(cfg(feature = "io-glob")))]
#[cfg(feature = "io-glob")]
pub mod glob;

#[cfg_attr(docsrs, doc(cfg(feature = "cloud")))]
#[cfg(feature = "cloud")]
pub mod cloud;
