//! Call-site attribution
//!
//! Walks the live stack when an entry is logged and reports the first
//! frame that does not belong to the logging facility itself.

use crate::types::CallerFrame;

/// Frames whose computed name equals this sentinel keep their name but
/// drop file/line attribution, letting instrumented call sites suppress
/// precise location reporting while still naming themselves.
const SKIP_SENTINEL: &str = "SKIP";

/// Symbol-name prefixes that are never reported: the locator itself and
/// the backtrace machinery beneath it.
const INTERNAL_PREFIXES: &[&str] = &[module_path!(), "backtrace"];

/// Resolve the nearest call-stack frame outside the logging facility.
///
/// `skip_prefixes` carries the caller's own internal prefixes (the
/// `Logger` type) on top of [`INTERNAL_PREFIXES`]. Returns the
/// `unavailable` fallback frame when nothing external resolves, which is
/// the case in stripped builds.
pub(crate) fn locate(skip_prefixes: &[&str]) -> CallerFrame {
    let mut located: Option<CallerFrame> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if located.is_some() {
                return;
            }
            let raw = match symbol.name() {
                Some(name) => name.to_string(),
                None => return,
            };
            let stripped = strip_hash(&raw);
            if is_internal(stripped, skip_prefixes) {
                return;
            }

            let mut found = CallerFrame::new(defining_name(stripped));
            if found.name != SKIP_SENTINEL {
                found.file = symbol.filename().map(|path| path.display().to_string());
                found.line = symbol.lineno();
            }
            located = Some(found);
        });
        // Keep walking outward until a frame resolves
        located.is_none()
    });

    located.unwrap_or_else(CallerFrame::unavailable)
}

fn is_internal(name: &str, skip_prefixes: &[&str]) -> bool {
    INTERNAL_PREFIXES
        .iter()
        .chain(skip_prefixes)
        .any(|prefix| name.starts_with(prefix))
}

/// Drop the `::h<16 hex>` disambiguator demangling appends to Rust symbols
fn strip_hash(symbol: &str) -> &str {
    if let Some(pos) = symbol.rfind("::h") {
        let hash = &symbol[pos + 3..];
        if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return &symbol[..pos];
        }
    }
    symbol
}

/// Reduce a demangled symbol path to its defining name: `Type::function`
/// for calls through an owning type, bare `function` otherwise.
fn defining_name(symbol: &str) -> String {
    let mut segments: Vec<&str> = symbol.split("::").collect();
    // Closures attribute to the enclosing function
    while segments.last() == Some(&"{{closure}}") {
        segments.pop();
    }
    match segments.as_slice() {
        [] => symbol.to_string(),
        [only] => (*only).to_string(),
        [.., owner, function] => {
            if owner.chars().next().is_some_and(char::is_uppercase) {
                format!("{owner}::{function}")
            } else {
                (*function).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash() {
        assert_eq!(
            strip_hash("app::handler::h0123456789abcdef"),
            "app::handler"
        );
        // Too short or non-hex suffixes are left alone
        assert_eq!(strip_hash("app::handler::h01"), "app::handler::h01");
        assert_eq!(strip_hash("app::http_server"), "app::http_server");
    }

    #[test]
    fn test_defining_name_for_free_function() {
        assert_eq!(defining_name("app::billing::charge"), "charge");
        assert_eq!(defining_name("main"), "main");
    }

    #[test]
    fn test_defining_name_for_method() {
        assert_eq!(
            defining_name("app::billing::Invoice::total"),
            "Invoice::total"
        );
    }

    #[test]
    fn test_defining_name_for_closure() {
        assert_eq!(
            defining_name("app::billing::charge::{{closure}}"),
            "charge"
        );
    }

    #[test]
    fn test_internal_prefixes() {
        assert!(is_internal(concat!(module_path!(), "::locate"), &[]));
        assert!(is_internal("backtrace::backtrace::trace", &[]));
        assert!(is_internal("app::Logger::log", &["app::Logger"]));
        assert!(!is_internal("app::billing::charge", &["app::Logger"]));
    }
}
