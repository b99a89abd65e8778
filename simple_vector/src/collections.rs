pub mod growth;
pub mod reserve;
pub mod vector;
