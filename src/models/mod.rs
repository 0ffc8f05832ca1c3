pub mod amount;
pub mod api_models;
pub mod csv_models;
pub mod deposit_command;
pub mod domain_state;
pub mod identifiers;
