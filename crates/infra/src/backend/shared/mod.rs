pub(crate) mod inmemory;
pub(crate) mod rest;
