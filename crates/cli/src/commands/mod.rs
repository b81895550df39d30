pub(crate) mod extract;
pub(crate) mod observations;
pub(crate) mod suggest;
