use serde::Deserialize;
use std::borrow::Cow;

/// The page number placeholder in URL templates.
pub const PLACEHOLDER: &str = "%d";

/// How [`render`](crate::Pager::render) builds the pagination fragment.
///
/// Every field has a default, so the options can be deserialized from a partial config:
///
/// ```
/// # use pagewise::RenderOptions;
/// let options: RenderOptions =
///     serde_json::from_str(r#"{"url": "/news/%d", "around": 1}"#).unwrap();
///
/// assert_eq!(options.page_url(1), "/news");
/// assert_eq!(options.page_url(4), "/news/4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// URL template for pages 2..N, `%d` is replaced with the page number.
    pub url: String,
    /// URL of the first page. Derived from `url` when absent.
    pub url_first: Option<String>,
    /// Number of sibling pages shown on each side of the current page.
    pub around: usize,
    /// Raw HTML placed between tokens.
    pub separator: String,
    /// Raw HTML marking omitted pages.
    pub ellipsis: String,
    pub labels: JumpLabels,
}

/// Plain text labels of the jump links. They are HTML-escaped on output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JumpLabels {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            url: "?page=%d".to_owned(),
            url_first: None,
            around: 2,
            separator: "&nbsp;".to_owned(),
            ellipsis: "&hellip;".to_owned(),
            labels: JumpLabels::default(),
        }
    }
}

impl Default for JumpLabels {
    fn default() -> Self {
        Self {
            first: "<<<".to_owned(),
            previous: "<<".to_owned(),
            next: ">>".to_owned(),
            last: ">>>".to_owned(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_url_first(mut self, url_first: impl Into<String>) -> Self {
        self.url_first = Some(url_first.into());
        self
    }

    pub fn with_around(mut self, around: usize) -> Self {
        self.around = around;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn with_labels(mut self, labels: JumpLabels) -> Self {
        self.labels = labels;
        self
    }

    /// URL of the first page: `url_first` if set, otherwise `url` without the placeholder and
    /// the query parameter or path segment holding it (`?page=%d` gives `?`, `/news/%d` gives
    /// `/news`).
    pub fn first_url(&self) -> Cow<'_, str> {
        match &self.url_first {
            Some(url) => Cow::Borrowed(url),
            None => Cow::Owned(strip_placeholder(&self.url)),
        }
    }

    pub fn page_url(&self, page: usize) -> Cow<'_, str> {
        if page == 1 {
            self.first_url()
        } else {
            Cow::Owned(self.url.replacen(PLACEHOLDER, &page.to_string(), 1))
        }
    }
}

fn strip_placeholder(url: &str) -> String {
    let Some(at) = url.find(PLACEHOLDER) else {
        return url.to_owned();
    };

    let head = url[..at].trim_end_matches(|c: char| !matches!(c, '/' | '?' | '&'));
    let head = head
        .strip_suffix(|c: char| c == '/' || c == '&')
        .filter(|head| !head.is_empty())
        .unwrap_or(head);

    format!("{head}{}", &url[at + PLACEHOLDER.len()..])
}
