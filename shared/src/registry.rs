//! ==============================================================================
//! registry.rs - guarded custom element registration
//! ==============================================================================
//!
//! purpose:
//!     a custom element name can only be defined once per page; defining it
//!     again throws. `define_once` checks before defining so a page that
//!     loads the header script twice keeps working.
//!
//! relationships:
//!     - implemented by: component (window.customElements)
//!     - implemented by: MemoryRegistry (native tests)
//!
//! ==============================================================================

use std::collections::HashSet;

use log::{info, warn};
use thiserror::Error;

/// hyphenated names reserved by html for svg and mathml
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid custom element name: {0}")]
    InvalidName(String),

    #[error("custom element already defined: {0}")]
    AlreadyDefined(String),

    #[error("element registry rejected definition: {0}")]
    Platform(String),
}

/// outcome of a guarded registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// this call defined the element
    Defined,
    /// an earlier call already did, nothing changed
    AlreadyDefined,
}

/// a place custom elements are defined into
pub trait ElementRegistry {
    fn is_defined(&self, name: &str) -> bool;

    /// define `name`; fails with `AlreadyDefined` if it is taken
    fn define(&mut self, name: &str) -> Result<(), RegistryError>;
}

/// character allowed after the first letter of a custom element name
fn is_name_char(c: char) -> bool {
    matches!(c,
        '-' | '.' | '_' | '0'..='9' | 'a'..='z'
        | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// check `name` against the custom element naming rules
///
/// must start with an ascii lowercase letter, contain a hyphen, use only
/// html's potential custom element name characters and not be one of the
/// reserved names.
pub fn is_valid_element_name(name: &str) -> bool {
    let starts_lower = name.starts_with(|c: char| c.is_ascii_lowercase());
    let has_hyphen = name.contains('-');

    starts_lower
        && has_hyphen
        && name.chars().all(is_name_char)
        && !RESERVED_NAMES.contains(&name)
}

/// define `name` unless it is already defined
///
/// a second registration is logged and reported as `AlreadyDefined`, never
/// surfaced as an error.
pub fn define_once<R: ElementRegistry + ?Sized>(
    registry: &mut R,
    name: &str,
) -> Result<Registration, RegistryError> {
    if !is_valid_element_name(name) {
        return Err(RegistryError::InvalidName(name.to_string()));
    }

    if registry.is_defined(name) {
        warn!("custom element <{}> already defined, skipping", name);
        return Ok(Registration::AlreadyDefined);
    }

    registry.define(name)?;
    info!("defined custom element <{}>", name);
    Ok(Registration::Defined)
}

// ==============================================================================
// in-memory registry
// ==============================================================================

/// registry backed by a set of names; mirrors the browser's duplicate rule
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    names: HashSet<String>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ElementRegistry for MemoryRegistry {
    fn is_defined(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn define(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.names.insert(name.to_string()) {
            return Err(RegistryError::AlreadyDefined(name.to_string()));
        }
        Ok(())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TAG_NAME;

    #[test]
    fn test_define_once_defines() {
        let mut registry = MemoryRegistry::new();
        assert_eq!(define_once(&mut registry, TAG_NAME), Ok(Registration::Defined));
        assert!(registry.is_defined(TAG_NAME));
    }

    #[test]
    fn test_define_once_twice_is_noop() {
        let mut registry = MemoryRegistry::new();
        define_once(&mut registry, TAG_NAME).unwrap();

        assert_eq!(define_once(&mut registry, TAG_NAME), Ok(Registration::AlreadyDefined));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_raw_define_rejects_duplicate() {
        let mut registry = MemoryRegistry::new();
        registry.define(TAG_NAME).unwrap();

        assert_eq!(
            registry.define(TAG_NAME),
            Err(RegistryError::AlreadyDefined(TAG_NAME.to_string()))
        );
    }

    #[test]
    fn test_define_once_rejects_invalid_name() {
        let mut registry = MemoryRegistry::new();
        assert_eq!(
            define_once(&mut registry, "header"),
            Err(RegistryError::InvalidName("header".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_element_names() {
        assert!(is_valid_element_name("header-component"));
        assert!(is_valid_element_name("x-1"));
        assert!(!is_valid_element_name("header"));
        assert!(!is_valid_element_name("Header-component"));
        assert!(!is_valid_element_name("header-Component"));
        assert!(!is_valid_element_name("1-header"));
        assert!(!is_valid_element_name("-header"));
        assert!(!is_valid_element_name("font-face"));
        assert!(!is_valid_element_name("my element"));
        assert!(!is_valid_element_name(""));
    }

    #[test]
    fn test_element_names_outside_ascii() {
        assert!(is_valid_element_name("café-menu"));
        assert!(is_valid_element_name("x-\u{1F600}"));
        assert!(!is_valid_element_name("a-\u{D7}"));
        assert!(!is_valid_element_name("a-\u{F7}"));
        assert!(!is_valid_element_name("a-\u{37E}"));
        assert!(!is_valid_element_name("a-\u{2000}"));
        assert!(!is_valid_element_name("a-\u{200B}"));
        assert!(!is_valid_element_name("a-\u{E000}"));
    }

    #[test]
    fn test_error_messages() {
        let err = RegistryError::InvalidName("bad".to_string());
        assert_eq!(err.to_string(), "invalid custom element name: bad");
    }
}
