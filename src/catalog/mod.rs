pub(crate) mod model;
pub(crate) mod naming;
pub(crate) mod seed;
pub(crate) mod store;
