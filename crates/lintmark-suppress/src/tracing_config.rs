//! Tracing setup for hosts embedding lintmark.
//!
//! Output format is controlled by `LINTMARK_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per event
//!
//! ```bash
//! LINTMARK_LOG=lintmark_suppress=trace LINTMARK_LOG_FORMAT=tree my-linter src/
//! ```
//!
//! Nothing is installed unless `LINTMARK_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("LINTMARK_LOG_FORMAT").unwrap_or_default())
    }
}

/// Filter directive to use, if logging was requested.
///
/// `LINTMARK_LOG` takes precedence over `RUST_LOG`.
pub fn filter_directive(lintmark_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    lintmark_log.or(rust_log)
}

/// Install the global subscriber from `LINTMARK_LOG` / `RUST_LOG` and
/// `LINTMARK_LOG_FORMAT`, writing to stderr.
///
/// Returns `false` when logging was not requested or a global subscriber
/// is already set.
pub fn init_tracing() -> bool {
    let directive = filter_directive(
        std::env::var("LINTMARK_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    );
    match directive {
        Some(directive) => init_tracing_with(&directive, LogFormat::from_env()),
        None => false,
    }
}

/// Install the global subscriber with an explicit filter and format.
pub fn init_tracing_with(directive: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::builder().parse_lossy(directive);
    let result = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    result.is_ok()
}
