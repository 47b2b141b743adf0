pub(crate) mod attributes;
pub(crate) mod figure;
pub(crate) mod gallery;
