use fibercheck_core::{CardView, ResultsView};

/// Plain-text rendering of a results view for terminals.
pub fn render_text(view: &ResultsView) -> String {
    match view {
        ResultsView::Empty {
            notice,
            search_prefix,
            query_line,
        } => format!("{notice}\n{search_prefix} {query_line}\n"),
        ResultsView::Cards {
            heading,
            query_line,
            cards,
        } => {
            let mut out = format!("{heading} {query_line}\n");
            for card in cards {
                out.push('\n');
                out.push_str(&render_card(card));
            }
            out
        }
    }
}

fn render_card(card: &CardView) -> String {
    let mut out = format!(
        "[{}] {}  {} {}\n",
        card.initials,
        card.provider,
        card.status.icon.glyph(),
        card.status.label
    );

    let mut details = vec![card.tech.clone()];
    details.extend(
        [&card.down, &card.up, &card.activation]
            .into_iter()
            .flatten()
            .cloned(),
    );
    out.push_str(&format!("     {}\n", details.join("  ")));

    if let Some(notes) = &card.notes {
        out.push_str(&format!("     {notes}\n"));
    }
    if let Some(offers) = &card.offers {
        out.push_str(&format!("     {}: {}\n", offers.label, offers.url));
    }
    out
}
