#![allow(clippy::unwrap_used)]

use css::{
    BackgroundAttachment, BackgroundAttachmentProperty, CssValue, PropertyRegistry,
    PropertyValidator, TextDecorationLineProperty, ValidatorState,
};

fn always_underline() -> Box<dyn PropertyValidator> {
    let mut property = TextDecorationLineProperty::new();
    property.validate(&CssValue::keyword("underline"));
    Box::new(property)
}

#[test]
fn create_ignores_ascii_case() {
    let registry = PropertyRegistry::with_builtin_properties();
    let validator = registry.create("BACKGROUND-ATTACHMENT").unwrap();
    assert_eq!(validator.name(), "background-attachment");
    assert_eq!(validator.state(), ValidatorState::Default);
    let typed = validator
        .downcast_ref::<BackgroundAttachmentProperty>()
        .unwrap();
    assert_eq!(typed.values(), &[BackgroundAttachment::Scroll]);
}

#[test]
fn unknown_names_create_nothing() {
    let registry = PropertyRegistry::with_builtin_properties();
    assert!(registry.create("background-color").is_none());
    assert!(!registry.contains("background-color"));
    assert!(PropertyRegistry::new().is_empty());
}

#[test]
fn duplicate_registration_is_an_error() {
    let mut registry = PropertyRegistry::with_builtin_properties();
    let error = registry
        .register("Text-Decoration-Line", always_underline)
        .unwrap_err();
    assert!(error.to_string().contains("text-decoration-line"));

    let mut empty = PropertyRegistry::new();
    empty.register("x-underline", always_underline).unwrap();
    assert!(empty.register("X-UNDERLINE", always_underline).is_err());
    assert_eq!(empty.len(), 1);
}

#[test]
fn create_always_hands_out_reset_validators() {
    let mut registry = PropertyRegistry::new();
    registry.register("x-underline", always_underline).unwrap();
    let validator = registry.create("x-underline").unwrap();
    assert_eq!(validator.state(), ValidatorState::Default);
    assert!(validator.keywords().is_empty());
}
