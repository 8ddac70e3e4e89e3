pub(crate) mod ease;
pub(crate) mod pan_zoom;
