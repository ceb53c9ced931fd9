use crate::catalog;

/// Inclusive range of accepted forecast day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DayRange {
    fn default() -> Self {
        Self { min: 1, max: 101 }
    }
}

impl DayRange {
    /// Parse raw user input. Anything that is not an integer inside the
    /// range is rejected rather than clamped.
    pub fn parse(&self, raw: &str) -> Option<u32> {
        let value = raw.trim().parse::<i64>().ok()?;
        if value < i64::from(self.min) || value > i64::from(self.max) {
            return None;
        }
        u32::try_from(value).ok()
    }

    pub fn contains(&self, days: u32) -> bool {
        (self.min..=self.max).contains(&days)
    }

    /// Hint shown next to the input after a rejected attempt.
    pub fn hint(&self) -> String {
        format!("Enter a whole number between {} and {}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    SetCountry(String),
    SetCompany(String),
    SetDays(String),
}

/// Country/company/day-count choices of the current session.
///
/// `company` is only ever `Some` for a member of `country`'s company set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub country: Option<String>,
    pub company: Option<String>,
    pub days: u32,
}

impl SelectionState {
    pub fn new(days: u32) -> Self {
        Self {
            country: None,
            company: None,
            days,
        }
    }

    pub fn reduce(self, action: SelectionAction, range: &DayRange) -> Self {
        self.reduce_checked(action, range).0
    }

    /// Like [`SelectionState::reduce`], also answering whether the action
    /// was accepted. Only day input can be rejected.
    pub fn reduce_checked(self, action: SelectionAction, range: &DayRange) -> (Self, bool) {
        match action {
            SelectionAction::SetCountry(country) => (
                Self {
                    country: non_empty(country),
                    company: None,
                    ..self
                },
                true,
            ),
            SelectionAction::SetCompany(company) => {
                let company = non_empty(company).filter(|company| {
                    self.country
                        .as_deref()
                        .is_some_and(|country| catalog::is_company_of(country, company))
                });
                if let (None, Some(country)) = (&company, &self.country) {
                    log::debug!("Ignoring company outside of {}", country);
                }
                (Self { company, ..self }, true)
            }
            SelectionAction::SetDays(raw) => match range.parse(&raw) {
                Some(days) => (Self { days, ..self }, true),
                None => {
                    log::debug!("Rejected day count input {:?}", raw);
                    (self, false)
                }
            },
        }
    }

    /// Companies the company selector offers for the current country.
    pub fn company_options(&self) -> &'static [&'static str] {
        self.country.as_deref().map(catalog::companies_for).unwrap_or(&[])
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<SelectionAction>) -> SelectionState {
        let range = DayRange::default();
        actions
            .into_iter()
            .fold(SelectionState::new(5), |state, action| state.reduce(action, &range))
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = SelectionState::new(5);
        assert_eq!(state.country, None);
        assert_eq!(state.company, None);
        assert_eq!(state.days, 5);
        assert!(state.company_options().is_empty());
    }

    #[test]
    fn test_company_options_follow_country() {
        for entry in catalog::CATALOG {
            let state = reduce_all(vec![SelectionAction::SetCountry(entry.name.to_string())]);
            assert_eq!(state.company_options(), entry.companies);
            assert_eq!(state.company, None);
        }
    }

    #[test]
    fn test_country_change_resets_company() {
        let state = reduce_all(vec![
            SelectionAction::SetCountry("India".to_string()),
            SelectionAction::SetCompany("TCS".to_string()),
            SelectionAction::SetCountry("Japan".to_string()),
        ]);
        assert_eq!(state.country.as_deref(), Some("Japan"));
        assert_eq!(state.company, None);
    }

    #[test]
    fn test_reselecting_same_country_still_resets_company() {
        let state = reduce_all(vec![
            SelectionAction::SetCountry("India".to_string()),
            SelectionAction::SetCompany("HDFC".to_string()),
            SelectionAction::SetCountry("India".to_string()),
        ]);
        assert_eq!(state.company, None);
    }

    #[test]
    fn test_unknown_country_offers_no_companies() {
        let state = reduce_all(vec![
            SelectionAction::SetCountry("Atlantis".to_string()),
            SelectionAction::SetCompany("TCS".to_string()),
        ]);
        assert_eq!(state.country.as_deref(), Some("Atlantis"));
        assert!(state.company_options().is_empty());
        assert_eq!(state.company, None);
    }

    #[test]
    fn test_company_outside_country_means_no_selection() {
        let state = reduce_all(vec![
            SelectionAction::SetCountry("India".to_string()),
            SelectionAction::SetCompany("TCS".to_string()),
            SelectionAction::SetCompany("Toyota".to_string()),
        ]);
        assert_eq!(state.company, None);
    }

    #[test]
    fn test_company_without_country_means_no_selection() {
        let state = reduce_all(vec![SelectionAction::SetCompany("TCS".to_string())]);
        assert_eq!(state.company, None);
    }

    #[test]
    fn test_days_out_of_range_keeps_last_valid_value() {
        let state = reduce_all(vec![
            SelectionAction::SetDays("0".to_string()),
            SelectionAction::SetDays("102".to_string()),
            SelectionAction::SetDays("-3".to_string()),
        ]);
        assert_eq!(state.days, 5);
    }

    #[test]
    fn test_days_non_integer_is_rejected() {
        let state = reduce_all(vec![
            SelectionAction::SetDays("".to_string()),
            SelectionAction::SetDays("7.5".to_string()),
            SelectionAction::SetDays("seven".to_string()),
        ]);
        assert_eq!(state.days, 5);
    }

    #[test]
    fn test_days_within_range_is_stored() {
        let state = reduce_all(vec![
            SelectionAction::SetDays(" 7 ".to_string()),
            SelectionAction::SetDays("101".to_string()),
        ]);
        assert_eq!(state.days, 101);

        let state = reduce_all(vec![SelectionAction::SetDays("1".to_string())]);
        assert_eq!(state.days, 1);
    }

    #[test]
    fn test_day_range_parse_rejects_overflow() {
        let range = DayRange { min: 1, max: u32::MAX };
        assert_eq!(range.parse("99999999999999999999"), None);
        assert_eq!(range.parse("4294967295"), Some(u32::MAX));
    }
}
