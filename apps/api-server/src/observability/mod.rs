//! Observability - the ERROR-level alert sink.

mod alert;

pub use alert::{AlertLayer, AlertMessage, AlertSender};
