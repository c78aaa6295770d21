pub mod tables;
pub mod virtual_net;
