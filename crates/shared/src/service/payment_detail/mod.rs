mod command;
mod query;

pub use self::command::PaymentDetailCommandService;
pub use self::query::PaymentDetailQueryService;
