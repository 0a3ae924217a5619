pub(crate) mod config;
pub(crate) mod overlay;
pub(crate) mod table;
