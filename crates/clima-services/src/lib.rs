pub mod forwarding;

pub use forwarding::{ForwardError, ForwardingClient, ProcessorClient};
