use chrono::NaiveDateTime;

use crate::api_client::GatewayError;

/// The two independent remote operations of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Forecast,
    RiskIndex,
}

impl OperationKind {
    /// Name used in user-facing notices.
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Forecast => "Prediction",
            OperationKind::RiskIndex => "GeoRisk Index",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Issued when a request starts; a response is only committed while its
/// ticket is still the latest one for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: OperationKind,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Committed,
    Discarded,
}

/// State machine of a single operation kind.
///
/// A new request keeps the previous result and failure message on screen
/// until its own outcome arrives; a failure never clears the last result.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation<T> {
    kind: OperationKind,
    status: OperationStatus,
    result: Option<T>,
    error: Option<String>,
    completed_at: Option<NaiveDateTime>,
    generation: u64,
}

impl<T> Operation<T> {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            status: OperationStatus::Idle,
            result: None,
            error: None,
            completed_at: None,
            generation: 0,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == OperationStatus::Pending
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        self.completed_at
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.status = OperationStatus::Pending;
        log::trace!("{:?} request #{} issued", self.kind, self.generation);
        RequestTicket {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Commit `outcome` if `ticket` is still the latest request.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<T, GatewayError>,
        at: NaiveDateTime,
    ) -> Commit {
        if ticket.kind != self.kind || ticket.generation != self.generation {
            log::debug!(
                "Discarding stale {:?} response #{} (latest is #{})",
                ticket.kind,
                ticket.generation,
                self.generation
            );
            return Commit::Discarded;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.status = OperationStatus::Succeeded;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.status = OperationStatus::Failed;
            }
        }
        self.completed_at = Some(at);
        Commit::Committed
    }

    /// Drop the displayed result and orphan any request in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.status = OperationStatus::Idle;
        self.result = None;
        self.error = None;
        self.completed_at = None;
    }
}
