use chrono::NaiveDateTime;
use common::{ForecastResult, PredictRequest, RiskIndexResult};

use super::operation::{Commit, Operation, OperationKind, RequestTicket};
use super::selection::{DayRange, SelectionAction, SelectionState};
use crate::api_client::GatewayError;

/// Arguments of a forecast request that passed the selection guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCall {
    pub ticket: RequestTicket,
    pub request: PredictRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskIndexCall {
    pub ticket: RequestTicket,
    pub company: String,
}

/// View state of the dashboard: the selection plus one state machine per
/// remote operation.
///
/// Selection changes reset the risk-index machine but deliberately leave
/// the forecast alone, so a forecast for the previous company stays on
/// screen until the user predicts again.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    range: DayRange,
    selection: SelectionState,
    forecast: Operation<ForecastResult>,
    risk_index: Operation<RiskIndexResult>,
}

impl DashboardStore {
    pub fn new(range: DayRange, default_days: u32) -> Self {
        let days = if range.contains(default_days) {
            default_days
        } else {
            log::warn!(
                "Default day count {} outside {}..={}, using {}",
                default_days,
                range.min,
                range.max,
                range.min
            );
            range.min
        };

        Self {
            range,
            selection: SelectionState::new(days),
            forecast: Operation::new(OperationKind::Forecast),
            risk_index: Operation::new(OperationKind::RiskIndex),
        }
    }

    pub fn range(&self) -> DayRange {
        self.range
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn forecast(&self) -> &Operation<ForecastResult> {
        &self.forecast
    }

    pub fn risk_index(&self) -> &Operation<RiskIndexResult> {
        &self.risk_index
    }

    /// Apply a selection change. Returns `false` when the action was
    /// rejected and nothing changed (only day input can be rejected).
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        let resets_risk = matches!(
            action,
            SelectionAction::SetCountry(_) | SelectionAction::SetCompany(_)
        );
        let previous = std::mem::replace(&mut self.selection, SelectionState::new(0));
        let (selection, accepted) = previous.reduce_checked(action, &self.range);
        self.selection = selection;

        if resets_risk {
            self.risk_index.invalidate();
        }

        accepted
    }

    pub fn trigger_forecast(&mut self) -> Result<ForecastCall, GatewayError> {
        let company = self.selected_company(OperationKind::Forecast)?;
        let request = PredictRequest::new(company, self.selection.days);
        let ticket = self.forecast.begin();
        log::debug!("Forecast requested for {} over {} days", request.company, request.days);
        Ok(ForecastCall { ticket, request })
    }

    pub fn trigger_risk_index(&mut self) -> Result<RiskIndexCall, GatewayError> {
        let company = self.selected_company(OperationKind::RiskIndex)?;
        let ticket = self.risk_index.begin();
        log::debug!("GeoRisk Index requested for {}", company);
        Ok(RiskIndexCall { ticket, company })
    }

    pub fn complete_forecast(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ForecastResult, GatewayError>,
        at: NaiveDateTime,
    ) -> Commit {
        self.forecast.complete(ticket, outcome, at)
    }

    pub fn complete_risk_index(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<RiskIndexResult, GatewayError>,
        at: NaiveDateTime,
    ) -> Commit {
        self.risk_index.complete(ticket, outcome, at)
    }

    fn selected_company(&self, kind: OperationKind) -> Result<String, GatewayError> {
        self.selection.company.clone().ok_or_else(|| {
            log::warn!("{} triggered without a company selected", kind.label());
            GatewayError::Validation("Please select a company first!".to_string())
        })
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DayRange::default(), 5)
    }
}
