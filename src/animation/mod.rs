pub(crate) mod motion;
