//! Rendering the downloads section.
//!
//! The rendering target is handed in explicitly instead of being reached
//! through page globals: `render_into` walks a built table and calls back
//! into a [`DownloadsView`]. The production view emits the site's HTML;
//! tests substitute recording views.

use crate::artifact::{DownloadRow, DownloadsTable};

/// Rendering target for the downloads section.
///
/// Mirrors the page elements the site binds to: the table body, the
/// version text and the primary download control.
pub trait DownloadsView {
    /// Append one table row.
    fn append_row(&mut self, row: &DownloadRow);

    /// Set the displayed version of the recommended download.
    fn set_version(&mut self, version: &str);

    /// Bind the primary download control to a URL.
    fn set_primary_url(&mut self, url: &str);
}

/// Render a built table into a view.
///
/// Rows are appended in input order. The version and primary URL are set
/// only when a recommendation exists; an empty table touches nothing.
pub fn render_into(table: &DownloadsTable, view: &mut dyn DownloadsView) {
    for row in &table.rows {
        view.append_row(row);
    }

    if let Some(recommended) = table.recommended() {
        view.set_version(&recommended.artifact.version);
        view.set_primary_url(&recommended.artifact.download_url);
    }
}

/// HTML view reproducing the site's downloads-section markup.
pub struct HtmlView {
    label: String,
    rows: String,
    version: Option<String>,
    primary_url: Option<String>,
}

impl HtmlView {
    /// Create a view; `label` is the text of every download button.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rows: String::new(),
            version: None,
            primary_url: None,
        }
    }

    /// Produce the final fragment for the static page.
    ///
    /// Without a recommendation the version span stays empty and the
    /// primary control carries no href.
    pub fn into_fragment(self) -> String {
        let primary = match self.primary_url {
            Some(url) => format!(
                "<a id=\"download_primary\" class=\"btn btn-lg btn-primary\" href=\"{}\" target=\"_blank\">{}</a>",
                url, self.label
            ),
            None => format!(
                "<a id=\"download_primary\" class=\"btn btn-lg btn-primary\">{}</a>",
                self.label
            ),
        };

        format!(
            "<p>Version <span id=\"grail_version\">{}</span></p>\n\
             {}\n\
             <a id=\"downloads_other\" href=\"#\">Other downloads</a>\n\
             <table id=\"downloads_table\" class=\"table d-none\">\n{}</table>\n",
            self.version.unwrap_or_default(),
            primary,
            self.rows,
        )
    }
}

impl DownloadsView for HtmlView {
    fn append_row(&mut self, row: &DownloadRow) {
        let button = if row.matched {
            "btn-primary"
        } else {
            "btn-outline-primary"
        };

        self.rows.push_str(&format!(
            "<tr><td class=\"text-left\"><b>{}</b></td><td>{}</td><td>{}</td>\
             <th><a href=\"{}\" class=\"btn btn-sm {}\" target=\"_blank\">{}</a></th></tr>\n",
            row.artifact.name,
            row.artifact.platform,
            row.artifact.arch,
            row.artifact.download_url,
            button,
            self.label,
        ));
    }

    fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    fn set_primary_url(&mut self, url: &str) {
        self.primary_url = Some(url.to_string());
    }
}
