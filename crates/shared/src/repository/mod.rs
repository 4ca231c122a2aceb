pub mod payment_detail;
