pub mod client_rows;
