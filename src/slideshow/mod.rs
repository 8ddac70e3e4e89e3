pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod ring;
pub(crate) mod slot;
pub(crate) mod source;
