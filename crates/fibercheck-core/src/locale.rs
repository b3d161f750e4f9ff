use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageStatus;
use crate::CoreError;

/// Language for user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    It,
    En,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    #[must_use]
    pub fn status_label(self, status: &CoverageStatus) -> &'static str {
        match (self, status) {
            (Locale::It, CoverageStatus::Available) => "Disponibile",
            (Locale::It, CoverageStatus::Soon) => "In arrivo",
            (Locale::It, CoverageStatus::InBuild) => "In costruzione",
            (Locale::It, CoverageStatus::NotAvailable) => "Non disponibile",
            (Locale::It, CoverageStatus::Unrecognized(_)) => "Sconosciuto",
            (Locale::En, CoverageStatus::Available) => "Available",
            (Locale::En, CoverageStatus::Soon) => "Coming soon",
            (Locale::En, CoverageStatus::InBuild) => "Under construction",
            (Locale::En, CoverageStatus::NotAvailable) => "Not available",
            (Locale::En, CoverageStatus::Unrecognized(_)) => "Unknown",
        }
    }

    #[must_use]
    pub fn no_results(self) -> &'static str {
        match self {
            Locale::It => "Nessun risultato per l'indirizzo indicato",
            Locale::En => "No results for the given address",
        }
    }

    /// Prefix for the formatted query under a "no results" notice.
    #[must_use]
    pub fn search_prefix(self) -> &'static str {
        match self {
            Locale::It => "Ricerca:",
            Locale::En => "Search:",
        }
    }

    #[must_use]
    pub fn results_for(self) -> &'static str {
        match self {
            Locale::It => "Risultati per",
            Locale::En => "Results for",
        }
    }

    /// Placeholder shown when a result carries no technology tag.
    #[must_use]
    pub fn tech_placeholder(self) -> &'static str {
        match self {
            Locale::It => "n/d",
            Locale::En => "n/a",
        }
    }

    #[must_use]
    pub fn activation(self, days: f64) -> String {
        match self {
            Locale::It => format!("Attivazione ~ {days} gg"),
            Locale::En => format!("Activation ~ {days} days"),
        }
    }

    #[must_use]
    pub fn see_offers(self) -> &'static str {
        match self {
            Locale::It => "Vedi offerte",
            Locale::En => "See offers",
        }
    }

    /// Reminder of which field combinations make a query submittable.
    #[must_use]
    pub fn form_hint(self) -> &'static str {
        match self {
            Locale::It => "Compila Comune + CAP o Via + Civico",
            Locale::En => "Fill in City + Postal code or Street + Number",
        }
    }

    /// Message for failures that never produced an HTTP response.
    #[must_use]
    pub fn generic_error(self) -> &'static str {
        match self {
            Locale::It => "Errore sconosciuto",
            Locale::En => "Unknown error",
        }
    }

    #[must_use]
    pub fn error_prefix(self) -> &'static str {
        match self {
            Locale::It => "Errore:",
            Locale::En => "Error:",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "it" | "it-it" => Ok(Locale::It),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(CoreError::UnknownLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
