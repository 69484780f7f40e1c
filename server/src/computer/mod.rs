pub(crate) mod server_computer;
