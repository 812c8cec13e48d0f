//! Plain terminal output.

use crate::catalog::{CatalogView, DetailView, Field, Link, NOT_AVAILABLE, PackageCard};

use super::{Render, strip_control as clean};

const LABEL_WIDTH: usize = 14;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

fn link(link: &Link) -> String {
    match link.href.as_deref().and_then(|h| h.strip_prefix("mailto:")) {
        Some(email) => format!("{} <{}>", clean(&link.label), clean(email)),
        None => clean(&link.label),
    }
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:<width$}{}\n", format!("{}:", label), value, width = LABEL_WIDTH));
}

/// Multi-line values continue under the value column.
fn rows(out: &mut String, label: &str, values: &[String]) {
    let mut iter = values.iter();
    row(out, label, iter.next().map(String::as_str).unwrap_or(""));
    for value in iter {
        out.push_str(&format!("{:<width$}{}\n", "", value, width = LABEL_WIDTH));
    }
}

fn field<T>(field: &Field<T>, render: impl FnOnce(&T) -> String) -> String {
    match field {
        Field::Present(value) => render(value),
        Field::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}

impl TextRenderer {
    fn summary(&self, card: &PackageCard, name_width: usize) -> String {
        let badge = clean(&card.badge());
        let line = format!(
            "{:<name_width$}  {:<10}  {}",
            clean(&card.name),
            badge,
            clean(&card.description),
            name_width = name_width
        );
        format!("{}\n", line.trim_end())
    }
}

impl Render for TextRenderer {
    fn catalog(&self, view: &CatalogView) -> String {
        match view {
            CatalogView::Packages { packages } => {
                let name_width = packages
                    .iter()
                    .map(|c| clean(&c.name).chars().count())
                    .max()
                    .unwrap_or(0);
                let mut out = String::new();
                for card in packages {
                    out.push_str(&self.summary(card, name_width));
                    if card.expanded {
                        if card.picker_open {
                            let versions: Vec<String> = card
                                .versions
                                .iter()
                                .map(|o| {
                                    let marker = if o.selected { "*" } else { " " };
                                    format!("{} {}", marker, clean(&o.version))
                                })
                                .collect();
                            out.push_str(&indent(&versions.join("\n"), "    "));
                        }
                        out.push_str(&indent(&self.detail(&card.detail), "    "));
                    }
                }
                out
            }
            CatalogView::NoResults { message } => format!("{}\n", message),
            CatalogView::LoadFailed { message, kind } => {
                format!("{} ({} error)\n", message, kind)
            }
        }
    }

    fn detail(&self, detail: &DetailView) -> String {
        let mut out = String::new();
        row(&mut out, "Chart", &clean(&detail.package));
        row(&mut out, "Version", &clean(&detail.version));
        row(&mut out, "Home", &field(&detail.home, link));
        row(&mut out, "App Version", &field(&detail.app_version, |v| clean(v)));
        row(
            &mut out,
            "Maintainers",
            &field(&detail.maintainers, |list| {
                list.iter().map(link).collect::<Vec<_>>().join(", ")
            }),
        );
        match &detail.sources {
            Field::Present(list) => {
                let sources: Vec<String> = list.iter().map(link).collect();
                rows(&mut out, "Sources", &sources);
            }
            Field::NotAvailable => row(&mut out, "Sources", NOT_AVAILABLE),
        }
        row(
            &mut out,
            "Keywords",
            &field(&detail.keywords, |list| {
                list.iter().map(|k| clean(k)).collect::<Vec<_>>().join(", ")
            }),
        );
        row(
            &mut out,
            "Install",
            &clean(&detail.install_command.to_string()),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, DEFAULT_REPO_ALIAS, Event, ViewState};
    use crate::index::{Maintainer, PackageIndex, Release};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            PackageIndex::from_packages(vec![
                (
                    "nginx".to_string(),
                    vec![Release {
                        name: "nginx".into(),
                        version: "1.2.3".into(),
                        description: Some("Web server".into()),
                        home: Some("https://nginx.org".into()),
                        app_version: Some("1.25.0".into()),
                        maintainers: Some(vec![
                            Maintainer {
                                name: "Alice".into(),
                                email: Some("alice@example.com".into()),
                                url: None,
                            },
                            Maintainer {
                                name: "Bob".into(),
                                email: None,
                                url: None,
                            },
                        ]),
                        sources: Some(vec![
                            "https://github.com/a".into(),
                            "https://github.com/b".into(),
                        ]),
                        keywords: Some(vec!["web".into(), "proxy".into()]),
                    }],
                ),
                (
                    "app".to_string(),
                    vec![Release {
                        name: "app".into(),
                        version: "0.1.0".into(),
                        ..Default::default()
                    }],
                ),
            ]),
            DEFAULT_REPO_ALIAS,
        )
    }

    #[test]
    fn test_detail_with_all_fields() {
        let text = TextRenderer.detail(&catalog().detail("nginx", None).unwrap());
        assert_eq!(
            text,
            "\
Chart:        nginx
Version:      1.2.3
Home:         https://nginx.org
App Version:  1.25.0
Maintainers:  Alice <alice@example.com>, Bob
Sources:      https://github.com/a
              https://github.com/b
Keywords:     web, proxy
Install:      helm install my-nginx eggybyte/nginx --version 1.2.3
"
        );
    }

    #[test]
    fn test_detail_not_available() {
        let text = TextRenderer.detail(&catalog().detail("app", None).unwrap());
        assert!(text.contains("Home:         N/A\n"));
        assert!(text.contains("App Version:  N/A\n"));
        assert!(text.contains("Maintainers:  N/A\n"));
        assert!(text.contains("Sources:      N/A\n"));
        assert!(text.contains("Keywords:     N/A\n"));
    }

    #[test]
    fn test_catalog_summary_lines() {
        let catalog = catalog();
        let text = TextRenderer.catalog(&catalog.view(&ViewState::new()));
        assert_eq!(text, "app    v0.1.0\nnginx  v1.2.3      Web server\n");
    }

    #[test]
    fn test_catalog_expanded_shows_detail() {
        let catalog = catalog();
        let mut state = ViewState::new();
        catalog
            .apply(&mut state, Event::ToggleExpand("app".into()))
            .unwrap();
        let text = TextRenderer.catalog(&catalog.view(&state));
        assert!(text.contains("    Chart:        app\n"));
        assert!(!text.contains("Chart:        nginx"));
    }

    #[test]
    fn test_control_characters_are_removed() {
        let catalog = Catalog::new(
            PackageIndex::from_packages(vec![(
                "x".to_string(),
                vec![Release {
                    name: "x".into(),
                    version: "1.0.0".into(),
                    description: Some("\u{1b}[2Jcleared".into()),
                    ..Default::default()
                }],
            )]),
            DEFAULT_REPO_ALIAS,
        );
        let text = TextRenderer.catalog(&catalog.view(&ViewState::new()));
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("[2Jcleared"));
    }

    #[test]
    fn test_no_results_and_failure_messages() {
        assert_eq!(
            TextRenderer.catalog(&CatalogView::no_results()),
            "No charts found matching your search.\n"
        );
        let failed = CatalogView::LoadFailed {
            message: "Could not load Helm chart repository.".into(),
            kind: "parse".into(),
        };
        assert_eq!(
            TextRenderer.catalog(&failed),
            "Could not load Helm chart repository. (parse error)\n"
        );
    }
}
