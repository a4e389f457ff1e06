pub(crate) mod raster;
pub(crate) mod settings;
pub(crate) mod svg;
