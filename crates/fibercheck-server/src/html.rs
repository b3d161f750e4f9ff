//! HTML markup for the coverage page.

use fibercheck_core::{AddressQuery, CardView, Field, Locale, ResultsView};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#0f172a;color:#e2e8f0;margin:2rem auto;max-width:960px}\
.card{border:1px solid #334155;border-radius:12px;padding:1rem;margin:.75rem 0;background:#1e293b}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:1rem}\
.form{display:grid;grid-template-columns:repeat(5,1fr);gap:.75rem}\
.badge{display:inline-flex;align-items:center;gap:.25rem;border-radius:999px;padding:.1rem .6rem;background:#334155;font-size:.85rem}\
.avatar{width:32px;height:32px;justify-content:center;padding:0}\
.status-success{border-color:#16a34a}.status-warn{border-color:#d97706}\
.status-error{border-color:#dc2626}.status-neutral{border-color:#64748b}\
.hint{color:#94a3b8;font-size:.85rem}";

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Verifica copertura fibra",
        Locale::En => "Fiber coverage check",
    }
}

fn submit_label(locale: Locale) -> &'static str {
    match locale {
        Locale::It => "Verifica copertura",
        Locale::En => "Check coverage",
    }
}

fn field_label(field: Field, locale: Locale) -> &'static str {
    match (locale, field) {
        (Locale::It, Field::Country) => "Paese",
        (Locale::It, Field::City) => "Comune",
        (Locale::It, Field::PostalCode) => "CAP",
        (Locale::It, Field::Street) => "Via",
        (Locale::It, Field::Civic) => "Civico",
        (Locale::En, Field::Country) => "Country",
        (Locale::En, Field::City) => "City",
        (Locale::En, Field::PostalCode) => "Postal code",
        (Locale::En, Field::Street) => "Street",
        (Locale::En, Field::Civic) => "Number",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Country => "IT",
        Field::City => "Asti",
        Field::PostalCode => "14100",
        Field::Street => "Via Roma",
        Field::Civic => "10",
    }
}

/// Full page: the form prefilled with `query`, followed by `view` when a
/// lookup was made.
pub fn render_page(query: &AddressQuery, view: Option<&ResultsView>, locale: Locale) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head><body><main>\
         <h1>{title}</h1><div class=\"card\">",
        lang = locale.code(),
        title = title(locale),
    ));
    out.push_str(&render_form(query, locale));
    if let Some(view) = view {
        out.push_str(&render_results(view));
    }
    out.push_str("</div></main></body></html>");
    out
}

fn render_form(query: &AddressQuery, locale: Locale) -> String {
    let mut out = String::from("<form method=\"get\" action=\"/coverage\"><div class=\"form\">");
    for field in Field::ALL {
        let label = field_label(field, locale);
        let name = field.wire_name();
        if field == Field::Country {
            // Only Italy is served; the select keeps the wire value fixed.
            out.push_str(&format!(
                "<label>{label}<select name=\"{name}\"><option value=\"IT\" selected>Italia</option></select></label>"
            ));
            continue;
        }
        out.push_str(&format!(
            "<label>{label}<input name=\"{name}\" value=\"{value}\" placeholder=\"{hint}\"></label>",
            value = escape(query.get(field)),
            hint = placeholder(field),
        ));
    }
    out.push_str(&format!(
        "</div><p><button type=\"submit\">{submit}</button> <span class=\"hint\">{hint}</span></p></form>",
        submit = submit_label(locale),
        hint = locale.form_hint(),
    ));
    out
}

/// Results section: a neutral notice when empty, otherwise one card per result.
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Empty {
            notice,
            search_prefix,
            query_line,
        } => format!(
            "<div class=\"card status-neutral\"><div><strong>{notice}</strong></div>\
             <div class=\"hint\">{search_prefix} {query}</div></div>",
            notice = escape(notice),
            query = escape(query_line),
        ),
        ResultsView::Cards {
            heading,
            query_line,
            cards,
        } => {
            let mut out = format!(
                "<section><p>{heading} <strong>{query}</strong></p><div class=\"grid\">",
                query = escape(query_line),
            );
            for card in cards {
                out.push_str(&render_card(card));
            }
            out.push_str("</div></section>");
            out
        }
    }
}

fn render_card(card: &CardView) -> String {
    let mut out = format!(
        "<div class=\"card {tone}\"><div class=\"header\">\
         <span class=\"badge avatar\">{initials}</span> <strong>{provider}</strong> \
         <span class=\"badge\" data-icon=\"{icon}\">{label}</span></div><p>\
         <span class=\"badge\">{tech}</span>",
        tone = card.status.tone.css_class(),
        initials = escape(&card.initials),
        provider = escape(&card.provider),
        icon = card.status.icon.name(),
        label = card.status.label,
        tech = escape(&card.tech),
    );
    for figure in [&card.down, &card.up, &card.activation].into_iter().flatten() {
        out.push_str(&format!(" <span>{}</span>", escape(figure)));
    }
    out.push_str("</p>");
    if let Some(notes) = &card.notes {
        out.push_str(&format!("<p>{}</p>", escape(notes)));
    }
    if let Some(offers) = &card.offers {
        out.push_str(&format!(
            "<a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">{label}</a>",
            url = escape(&offers.url),
            label = offers.label,
        ));
    }
    out.push_str("</div>");
    out
}
