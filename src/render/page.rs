//! The dashboard shell: a static HTML page with a sidebar and one section per chart.

use crate::render::charts::ChartKind;
use crate::render::error::RenderError;
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// One chart on the page, embedded from its own HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSection {
    pub heading: String,
    pub chart: ChartKind,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    pub title: String,
    pub welcome: String,
    pub introduction: String,
    /// File name of the logo inside the output directory, if one was copied.
    pub logo_file: Option<String>,
    pub sections: Vec<ChartSection>,
    pub footer: String,
}

impl DashboardPage {
    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::new();

        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
        );

        html.push_str("<aside class=\"sidebar\">\n");
        if let Some(logo) = &self.logo_file {
            let _ = writeln!(
                html,
                "<img class=\"logo\" src=\"{}\" alt=\"logo\">",
                escape_html(logo)
            );
        }
        let _ = writeln!(html, "<h1>{title}</h1>\n</aside>");

        html.push_str("<main>\n");
        let _ = writeln!(html, "<h1>{title}</h1>");
        let _ = writeln!(html, "<h2>{}</h2>", escape_html(&self.welcome));
        let _ = writeln!(html, "<p>{}</p>", escape_html(&self.introduction));

        for section in &self.sections {
            let _ = writeln!(
                html,
                "<section>\n<h3>{}</h3>\n\
                 <iframe src=\"{}\" title=\"{}\"></iframe>\n\
                 <p class=\"caption\">{}</p>\n</section>",
                escape_html(&section.heading),
                section.chart.file_name(),
                escape_html(section.chart.title()),
                escape_html(&section.caption),
            );
        }

        let _ = writeln!(
            html,
            "<p class=\"caption\">{}</p>\n</main>\n</body>\n</html>",
            escape_html(&self.footer)
        );
        html
    }

    /// Writes `index.html` into `dir` and returns its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let path = dir.join(INDEX_FILE);
        fs::write(&path, self.to_html()).map_err(|e| RenderError::PageWrite(path.clone(), e))?;
        info!("Wrote dashboard page to {:?}", path);
        Ok(path)
    }
}

const STYLE: &str = "body{margin:0;display:flex;font-family:sans-serif}\
.sidebar{width:260px;min-height:100vh;padding:1rem;background:#f0f2f6}\
.logo{width:100%}\
main{flex:1;padding:1rem 3rem}\
iframe{width:100%;height:620px;border:none}\
.caption{color:#6b6b6b;font-size:.9rem}";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
