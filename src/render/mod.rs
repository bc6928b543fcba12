//! Scene construction and output backends.

pub(crate) mod arc;
pub(crate) mod geometry;
pub(crate) mod paint;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod svg;
