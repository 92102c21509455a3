pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    Memory,
}
