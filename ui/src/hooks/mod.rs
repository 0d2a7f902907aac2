pub mod use_status;
