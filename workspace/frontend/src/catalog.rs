//! Countries and the companies the prediction service has models for.

pub struct CountryEntry {
    pub name: &'static str,
    pub companies: &'static [&'static str],
}

pub const CATALOG: &[CountryEntry] = &[
    CountryEntry {
        name: "India",
        companies: &["TCS", "Reliance", "Adani", "HDFC"],
    },
    CountryEntry {
        name: "Japan",
        companies: &["Toyota", "Honda", "Sony", "Nintendo"],
    },
    CountryEntry {
        name: "China",
        companies: &["Alibaba", "Xiaomi", "JD.com Inc", "Tencent"],
    },
];

pub fn countries() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

/// Companies offered for `country`; empty for a country outside the catalog.
pub fn companies_for(country: &str) -> &'static [&'static str] {
    CATALOG
        .iter()
        .find(|entry| entry.name == country)
        .map(|entry| entry.companies)
        .unwrap_or(&[])
}

pub fn is_company_of(country: &str, company: &str) -> bool {
    companies_for(country).contains(&company)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_in_display_order() {
        assert_eq!(countries().collect::<Vec<_>>(), vec!["India", "Japan", "China"]);
    }

    #[test]
    fn test_companies_for_india() {
        assert_eq!(companies_for("India"), &["TCS", "Reliance", "Adani", "HDFC"]);
    }

    #[test]
    fn test_unknown_country_has_no_companies() {
        assert!(companies_for("Atlantis").is_empty());
        assert!(companies_for("").is_empty());
    }

    #[test]
    fn test_company_membership() {
        assert!(is_company_of("China", "JD.com Inc"));
        assert!(!is_company_of("Japan", "TCS"));
    }
}
