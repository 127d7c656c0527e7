pub(crate) mod z_order;
