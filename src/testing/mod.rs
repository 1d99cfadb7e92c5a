pub mod ports;

pub use ports::{ListingOrderGateway, ScriptedConsole};
