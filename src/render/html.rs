//! HTML fragments for embedding the catalog in a page.

use std::fmt::Write as _;

use crate::catalog::{CatalogView, DetailView, Field, Link, NOT_AVAILABLE, PackageCard};

use super::{Render, escape_html as esc};

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

fn link(link: &Link) -> String {
    match &link.href {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            esc(href),
            esc(&link.label)
        ),
        None => esc(&link.label),
    }
}

fn or_not_available<T>(field: &Field<T>, render: impl FnOnce(&T) -> String) -> String {
    match field {
        Field::Present(value) => render(value),
        Field::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

fn detail_card(title: &str, content: &str) -> String {
    format!(
        r#"<div class="detail-card"><div class="detail-card-header"><strong>{}</strong></div><div class="detail-card-content">{}</div></div>"#,
        title, content
    )
}

impl HtmlRenderer {
    fn card(&self, card: &PackageCard) -> String {
        let name = esc(&card.name);
        let mut out = String::new();

        let class = if card.expanded {
            "chart-item active"
        } else {
            "chart-item"
        };
        let _ = write!(
            out,
            r#"<div class="{}" id="chart-{}" data-chart-name="{}">"#,
            class, name, name
        );
        let _ = write!(
            out,
            r#"<div class="chart-item-header"><div><h3>{}</h3><p class="chart-item-description">{}</p></div><span class="chart-version-badge">{}</span></div>"#,
            name,
            esc(&card.description),
            esc(&card.badge())
        );

        let options: String = card
            .versions
            .iter()
            .map(|option| {
                let selected = if option.selected { " selected" } else { "" };
                let version = esc(&option.version);
                format!(
                    r#"<div class="custom-select-option{}" data-value="{}">{}</div>"#,
                    selected, version, version
                )
            })
            .collect();
        let wrapper = if card.picker_open {
            "custom-select-wrapper open"
        } else {
            "custom-select-wrapper"
        };

        let _ = write!(
            out,
            r#"<div class="chart-details"><div><div class="details-content"><div class="details-header"><h4>Chart Details</h4><div class="{}" data-chart-name="{}"><div class="custom-select-trigger">{}</div><div class="custom-select-options">{}</div></div></div>{}</div></div></div>"#,
            wrapper,
            name,
            esc(&card.badge()),
            options,
            self.detail(&card.detail)
        );
        out.push_str("</div>");
        out
    }
}

impl Render for HtmlRenderer {
    fn catalog(&self, view: &CatalogView) -> String {
        match view {
            CatalogView::Packages { packages } => {
                let items: String = packages.iter().map(|card| self.card(card)).collect();
                format!(r#"<div class="charts-list">{}</div>"#, items)
            }
            CatalogView::NoResults { message } => {
                format!(r#"<div class="charts-list no-results">{}</div>"#, esc(message))
            }
            CatalogView::LoadFailed { message, kind } => format!(
                r#"<div class="charts-list no-results"><p class="error-message" data-error-kind="{}">{}</p></div>"#,
                esc(kind),
                esc(message)
            ),
        }
    }

    fn detail(&self, detail: &DetailView) -> String {
        let home = or_not_available(&detail.home, link);
        let app_version = or_not_available(&detail.app_version, |v| {
            format!("<span>{}</span>", esc(v))
        });
        let maintainers = or_not_available(&detail.maintainers, |list| {
            list.iter().map(link).collect::<Vec<_>>().join(", ")
        });
        let sources = or_not_available(&detail.sources, |list| {
            list.iter().map(link).collect::<Vec<_>>().join("<br>")
        });
        let keywords = or_not_available(&detail.keywords, |list| {
            let items: String = list
                .iter()
                .map(|k| format!("<li>{}</li>", esc(k)))
                .collect();
            format!(r#"<ul class="keywords-list">{}</ul>"#, items)
        });
        let command = esc(&detail.install_command.to_string());

        let mut out = String::new();
        out.push_str(r#"<div class="details-body"><div class="details-grid-3-col">"#);
        out.push_str(&detail_card("Home", &home));
        out.push_str(&detail_card("App Version", &app_version));
        out.push_str(&detail_card("Maintainers", &maintainers));
        out.push_str("</div>");
        out.push_str(&detail_card("Sources", &sources));
        out.push_str(&detail_card("Keywords", &keywords));
        out.push_str("</div>");
        let _ = write!(
            out,
            r#"<div class="helm-install-block"><div class="terminal-header"><button class="copy-btn" data-clipboard-text="{}" title="Copy Command">Copy</button></div><div class="terminal-content"><pre><code><span class="comment"># Install chart version {}</span>
<span class="prompt">$ </span><span class="command">{}</span></code></pre></div></div>"#,
            command,
            esc(&detail.version),
            command
        );
        out
    }
}
