mod init;
mod spans;
mod trade_id;

pub use init::init_logger;
pub use spans::{pool_span, trade_span};
pub use trade_id::TradeId;
