#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use detpost_geometry as geometry;

#[doc(inline)]
pub use detpost_dnn as dnn;
