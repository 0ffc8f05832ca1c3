pub mod client_store_trait;
