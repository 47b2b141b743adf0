pub(crate) mod cpu;
pub(crate) mod plan;
pub(crate) mod surface;
pub(crate) mod text;
