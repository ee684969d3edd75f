//! Error chain formatting.

use core::error::Error;
use core::fmt::Write;

use crate::traits::chain::Chain;
use crate::types::alloc_type::String;
use crate::types::ErrorStr;

/// Configuration for rendering an error together with its causes.
///
/// # Examples
///
/// ```
/// use errstr::{ErrorFormatConfig, ErrorStr, Site};
///
/// let root = ErrorStr::new_at("refused", Site::new("net::dial", "src/net.rs", 8, 1));
/// let err = ErrorStr::wrap_at(root, "connecting", Site::UNKNOWN);
///
/// assert_eq!(err.fmt_chain(&ErrorFormatConfig::compact()), "connecting | refused");
/// assert_eq!(
///     err.fmt_chain(&ErrorFormatConfig::pretty()),
///     "connecting [<unknown func>]\n  └─ refused [net::dial src/net.rs:8]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    /// Inserted between two links of the chain.
    pub separator: String,
    /// Written before every link except the first.
    pub cause_prefix: Option<String>,
    /// Indent each cause one step deeper than the previous link.
    pub multiline: bool,
    pub indent: String,
    /// Render [`ErrorStr`] links with their location.
    pub show_location: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            cause_prefix: None,
            multiline: false,
            indent: "  ".into(),
            show_location: false,
        }
    }
}

impl ErrorFormatConfig {
    /// One link per line, indented, with locations.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            cause_prefix: Some("└─ ".into()),
            multiline: true,
            show_location: true,
            ..Default::default()
        }
    }

    /// Single line with a short separator.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// The default layout with locations appended.
    #[inline]
    pub fn located() -> Self {
        Self { show_location: true, ..Default::default() }
    }

    /// Renders `head` and every error reachable through `source()`.
    pub fn format(&self, head: &(dyn Error + 'static)) -> String {
        let mut out = String::new();

        for (depth, link) in Chain::new(head).enumerate() {
            if depth > 0 {
                out.push_str(&self.separator);
                if self.multiline {
                    for _ in 0..depth {
                        out.push_str(&self.indent);
                    }
                }
                if let Some(prefix) = &self.cause_prefix {
                    out.push_str(prefix);
                }
            }

            match link.downcast_ref::<ErrorStr>() {
                Some(err) if self.show_location => {
                    let _ = write!(out, "{err:#}");
                },
                _ => {
                    let _ = write!(out, "{link}");
                },
            }
        }

        out
    }
}
