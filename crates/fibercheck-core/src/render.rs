//! Results rendering as a presentation-neutral view model.
//!
//! [`results_view`] is a pure function of the query, the result list and the
//! locale. HTML and terminal front-ends map the returned [`ResultsView`] to
//! their own markup.

use serde::Serialize;

use crate::address::AddressQuery;
use crate::coverage::{CoverageResult, CoverageStatus};
use crate::locale::Locale;

/// Visual tone of a status badge or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warn,
    Error,
    Neutral,
}

impl Tone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "status-success",
            Tone::Warn => "status-warn",
            Tone::Error => "status-error",
            Tone::Neutral => "status-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CheckCircle,
    AlertTriangle,
    Radar,
    XCircle,
    HelpCircle,
}

impl Icon {
    /// Icon-set name, as used by the web page.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Radar => "radar",
            Icon::XCircle => "x-circle",
            Icon::HelpCircle => "help-circle",
        }
    }

    /// Single-character stand-in for terminals.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::CheckCircle => "✔",
            Icon::AlertTriangle => "⚠",
            Icon::Radar => "◎",
            Icon::XCircle => "✘",
            Icon::HelpCircle => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: Icon,
}

/// Label, tone and icon for a status. Unrecognized codes get the neutral
/// "unknown" presentation.
#[must_use]
pub fn status_presentation(status: &CoverageStatus, locale: Locale) -> StatusPresentation {
    let (tone, icon) = match status {
        CoverageStatus::Available => (Tone::Success, Icon::CheckCircle),
        CoverageStatus::Soon => (Tone::Warn, Icon::AlertTriangle),
        CoverageStatus::InBuild => (Tone::Warn, Icon::Radar),
        CoverageStatus::NotAvailable => (Tone::Error, Icon::XCircle),
        CoverageStatus::Unrecognized(_) => (Tone::Neutral, Icon::HelpCircle),
    };
    StatusPresentation {
        label: locale.status_label(status),
        tone,
        icon,
    }
}

/// Up to two uppercase initials from the space-separated words of `name`.
#[must_use]
pub fn provider_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Street, civic, postal code and city joined by spaces, omitting empty parts.
#[must_use]
pub fn format_query(query: &AddressQuery) -> String {
    [
        query.street.as_str(),
        query.civic.as_str(),
        query.postal_code.as_str(),
        query.city.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffersLink {
    pub label: &'static str,
    pub url: String,
}

/// Everything one provider card shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub initials: String,
    pub provider: String,
    pub status: StatusPresentation,
    pub tech: String,
    pub down: Option<String>,
    pub up: Option<String>,
    pub activation: Option<String>,
    pub notes: Option<String>,
    pub offers: Option<OffersLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultsView {
    /// Neutral notice shown when no provider reported anything.
    Empty {
        notice: &'static str,
        search_prefix: &'static str,
        query_line: String,
    },
    Cards {
        heading: &'static str,
        query_line: String,
        cards: Vec<CardView>,
    },
}

impl ResultsView {
    #[must_use]
    pub fn query_line(&self) -> &str {
        match self {
            ResultsView::Empty { query_line, .. } | ResultsView::Cards { query_line, .. } => {
                query_line
            }
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            ResultsView::Empty { .. } => &[],
            ResultsView::Cards { cards, .. } => cards,
        }
    }
}

#[must_use]
pub fn results_view(
    query: &AddressQuery,
    results: &[CoverageResult],
    locale: Locale,
) -> ResultsView {
    let query_line = format_query(query);
    if results.is_empty() {
        return ResultsView::Empty {
            notice: locale.no_results(),
            search_prefix: locale.search_prefix(),
            query_line,
        };
    }

    ResultsView::Cards {
        heading: locale.results_for(),
        query_line,
        cards: results.iter().map(|r| card_view(r, locale)).collect(),
    }
}

fn card_view(result: &CoverageResult, locale: Locale) -> CardView {
    CardView {
        initials: provider_initials(&result.provider),
        provider: result.provider.clone(),
        status: status_presentation(&result.status, locale),
        tech: result
            .tech
            .clone()
            .unwrap_or_else(|| locale.tech_placeholder().to_string()),
        down: result.max_down_mbps.map(|mbps| format!("↓ {mbps} Mbps")),
        up: result.max_up_mbps.map(|mbps| format!("↑ {mbps} Mbps")),
        activation: result
            .estimated_activation_days
            .map(|days| locale.activation(days)),
        notes: result.notes.clone(),
        offers: result.offers_url.as_ref().map(|url| OffersLink {
            label: locale.see_offers(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
