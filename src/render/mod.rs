pub(crate) mod camera;
pub(crate) mod cpu;
pub(crate) mod overlay;
