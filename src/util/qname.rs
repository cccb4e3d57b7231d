//! `QName` (qualified name) handling.
//!
//! A `QName` is a name of the form `prefix:localname` or just `localname` (with
//! no prefix). Names are split on the last colon, so `a:b:c` has the local
//! part `c` and the prefix `a:b`.
//!
//! See <https://www.w3.org/TR/xml-names/#NT-QName>

/// Splits a `QName` into its prefix and local name parts.
///
/// Returns `(Some(prefix), localname)` if the name contains a colon,
/// or `(None, localname)` if it does not.
///
/// # Examples
///
/// ```
/// use xmlnode::util::qname::split_qname;
///
/// assert_eq!(split_qname("svg:rect"), (Some("svg"), "rect"));
/// assert_eq!(split_qname("div"), (None, "div"));
/// ```
#[must_use]
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.rfind(':') {
        Some(pos) => (Some(&qname[..pos]), &qname[pos + 1..]),
        None => (None, qname),
    }
}

/// Returns the local part of `qname`: `bar` in `foo:bar`.
#[must_use]
pub fn local_name_for_name(qname: &str) -> &str {
    split_qname(qname).1
}

/// Returns the prefix of `qname`: `foo` in `foo:bar`.
#[must_use]
pub fn prefix_for_name(qname: &str) -> Option<&str> {
    split_qname(qname).0
}
