//! Framework-agnostic inventory and finance entities.

pub mod alerts;
pub mod credentials;
pub mod stock;
pub mod transaction;

pub use alerts::{AlertsReport, FinancialSummary};
pub use credentials::Credentials;
pub use stock::StockItem;
pub use transaction::{
    CustomerTransaction, PaymentStatus, PendingPayment, SupplierTransaction,
};
