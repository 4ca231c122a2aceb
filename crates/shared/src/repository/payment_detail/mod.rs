mod command;
mod query;

pub use self::command::PaymentDetailCommandRepository;
pub use self::query::PaymentDetailQueryRepository;
