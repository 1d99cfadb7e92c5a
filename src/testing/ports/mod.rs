mod listing_order_gateway;
mod scripted_console;

pub use listing_order_gateway::ListingOrderGateway;
pub use scripted_console::ScriptedConsole;
