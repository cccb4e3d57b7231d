//! Utility modules for xmlnode.
//!
//! Contains `QName` handling.

pub mod qname;
