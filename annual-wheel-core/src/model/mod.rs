pub(crate) mod theme;
pub(crate) mod wheel;
