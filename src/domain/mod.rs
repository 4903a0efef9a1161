//! Domain types: money, the fixed catalogs, transaction state and the ports
//! the host uses to talk to the outside world.

pub mod catalog;
pub mod money;
pub mod ports;
pub mod transaction;
