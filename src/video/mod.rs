pub(crate) mod compositor;
pub(crate) mod frame;
pub(crate) mod settings;
pub(crate) mod theme;
pub(crate) mod timing;
pub(crate) mod uploads;
