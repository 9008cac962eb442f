//! Build reports on stderr.
//!
//! Generator output may go to stdout, so every message here goes to stderr.

use std::path::Path;

use console::{Style, Term};
use polydoc_site::{LocaleConfig, SiteConfig};

/// Colored reporter for the build and check commands.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    failed: Style,
    heading: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            failed: Style::new().red(),
            heading: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Name the configuration file in use.
    pub(crate) fn config_file(&self, path: &Path) {
        self.line(&format!(
            "{} {}",
            self.dim.apply_to("config:"),
            path.display()
        ));
    }

    /// Site-wide settings, then one line per locale.
    pub(crate) fn site_summary(&self, site: &SiteConfig) {
        self.line(
            &self
                .heading
                .apply_to(format!(
                    "{} (default {}, dead links: {})",
                    site.base_path(),
                    site.default_locale().prefix(),
                    site.dead_link_policy()
                ))
                .to_string(),
        );
        for locale in site.locales() {
            self.locale_line(locale);
        }
    }

    fn locale_line(&self, locale: &LocaleConfig) {
        let theme = locale.theme();
        self.line(&format!(
            "  {:<8} {:<8} {} nav, {} sections, {} links",
            locale.prefix(),
            locale.lang(),
            theme.nav.len(),
            theme.sidebar.len(),
            theme.links().count()
        ));
    }

    /// Report the generator config written to `path`.
    pub(crate) fn written(&self, site: &SiteConfig, path: &Path) {
        let msg = format!(
            "Wrote {} locale(s) to {}",
            site.locales().count(),
            path.display()
        );
        self.line(&self.ok.apply_to(msg).to_string());
    }

    /// Report a successful check.
    pub(crate) fn checked(&self, site: &SiteConfig) {
        let msg = format!("{} locale(s) OK", site.locales().count());
        self.line(&self.ok.apply_to(msg).to_string());
    }

    /// Print a failure.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.failed.apply_to(msg).to_string());
    }
}
