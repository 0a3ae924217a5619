pub(crate) mod color;
pub(crate) mod family;
pub(crate) mod fingerprint;
pub(crate) mod kind;
