use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown table '{0}' (expected one of: dim_Customers, dim_Products, fact_Invoices)")]
    UnknownTable(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
