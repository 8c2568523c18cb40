//! HTML parsing on top of html5ever
//!
//! html5ever follows the WHATWG tree-construction algorithm, so malformed
//! markup is repaired (implied `html`/`body`/`tbody` elements are inserted)
//! instead of rejected. The only failure left is an I/O error from the input
//! sink, which cannot happen for an in-memory string but is still propagated.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;
use tracing::debug;

use super::errors::ConversionResult;

/// Parse an HTML document into a read-only `RcDom` tree.
pub fn parse_html(html: &str) -> ConversionResult<RcDom> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    Ok(dom)
}

/// Number of parse errors the tree builder recovered from, logged at debug.
pub fn log_recovered_errors(dom: &RcDom) -> usize {
    let recovered = dom.errors.borrow().len();
    if recovered > 0 {
        debug!(recovered, "HTML parsed with recoverable errors");
    } else {
        debug!("HTML parsed cleanly");
    }
    recovered
}

/// Check that the input can be parsed as HTML.
///
/// Logs how many recoverable errors the tree builder repaired. Only a parser
/// I/O failure is reported as an error.
pub fn validate_html(html: &str) -> ConversionResult<()> {
    let dom = parse_html(html)?;
    log_recovered_errors(&dom);
    Ok(())
}
