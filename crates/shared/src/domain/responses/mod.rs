mod payment_detail;

pub use self::payment_detail::PaymentDetailResponse;
