//! Selection model and view-state controller.
//!
//! Nothing in here touches the DOM or the network; components drive the
//! store through [`crate::hooks::use_dashboard`].

mod operation;
mod selection;
mod store;

pub use operation::{Commit, Operation, OperationKind, OperationStatus, RequestTicket};
pub use selection::{DayRange, SelectionAction, SelectionState};
pub use store::{DashboardStore, ForecastCall, RiskIndexCall};
