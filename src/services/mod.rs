pub mod activity_log_codec;
pub mod admission_controller;
pub mod bank_service;
pub mod csv_service;
pub mod deposit_transactor;
pub mod deposit_workflow;
#[cfg(test)]
pub mod test_support;
pub mod traits;
