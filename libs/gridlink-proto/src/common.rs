use prost::Message;

/// Empty request/response payload.
#[derive(Clone, PartialEq, Message)]
pub struct Empty {}
