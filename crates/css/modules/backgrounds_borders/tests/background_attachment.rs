#![allow(clippy::unwrap_used)]

use css_backgrounds_borders::{
    BackgroundAttachment, BackgroundBox, background_attachment, background_clip,
    background_origin,
};
use css_cascade::{PropertyValidator as _, ValidatorState};
use css_values_units::{CssValue, Length, LengthUnit, ValidationError};

fn keyword(text: &str) -> CssValue {
    CssValue::keyword(text)
}

fn layers(texts: &[&str]) -> CssValue {
    let mut items = Vec::new();
    for (index, text) in texts.iter().enumerate() {
        if index > 0 {
            items.push(CssValue::Separator);
        }
        items.push(keyword(text));
    }
    CssValue::List(items)
}

#[test]
fn reset_yields_single_scroll_layer() {
    let mut property = background_attachment();
    assert_eq!(property.values(), &[BackgroundAttachment::Scroll]);
    assert_eq!(property.state(), ValidatorState::Default);
    assert_eq!(property.name(), "background-attachment");
    assert!(!property.inherited());

    assert!(property.validate(&keyword("fixed")));
    property.reset();
    let once = property.values().to_vec();
    property.reset();
    assert_eq!(property.values(), once.as_slice());
    assert_eq!(once, vec![BackgroundAttachment::Scroll]);
}

#[test]
fn keywords_match_in_any_ascii_case() {
    for spelling in ["fixed", "FIXED", "Fixed", "fIxEd"] {
        let mut property = background_attachment();
        assert!(property.validate(&keyword(spelling)), "{spelling}");
        assert_eq!(property.values(), &[BackgroundAttachment::Fixed]);
        assert_eq!(property.keywords(), vec!["fixed"]);
    }
}

#[test]
fn two_layers_commit_in_input_order() {
    let mut property = background_attachment();
    assert!(property.validate(&layers(&["local", "fixed"])));
    assert_eq!(
        property.values(),
        &[BackgroundAttachment::Local, BackgroundAttachment::Fixed]
    );
    assert_eq!(property.state(), ValidatorState::Committed);
}

#[test]
fn missing_separator_fails_without_touching_state() {
    let mut property = background_attachment();
    assert!(property.validate(&layers(&["local", "fixed"])));
    let before = property.values().to_vec();

    let value = CssValue::list([
        keyword("scroll"),
        CssValue::Separator,
        keyword("fixed"),
        keyword("local"),
    ]);
    assert_eq!(
        property.try_validate(&value),
        Err(ValidationError::MalformedSeparator)
    );
    assert_eq!(property.values(), before.as_slice());
    assert_eq!(property.state(), ValidatorState::Committed);
}

#[test]
fn invalid_inputs_leave_default_state_untouched() {
    let invalid = [
        keyword("sticky"),
        CssValue::Separator,
        CssValue::list([keyword("fixed"), CssValue::Separator]),
        CssValue::list([CssValue::Separator, keyword("fixed")]),
        CssValue::list([keyword("fixed"), CssValue::Separator, keyword("none")]),
        CssValue::Length(Length {
            value: 1.0,
            unit: LengthUnit::Pixels,
        }),
    ];
    for value in &invalid {
        let mut property = background_attachment();
        assert!(!property.validate(value), "{value:?}");
        assert_eq!(property.values(), &[BackgroundAttachment::Scroll]);
        assert_eq!(property.state(), ValidatorState::Default);
    }
}

#[test]
fn empty_list_commits_no_layers() {
    let mut property = background_attachment();
    assert!(property.validate(&CssValue::List(Vec::new())));
    assert!(property.values().is_empty());
    assert_eq!(property.state(), ValidatorState::Committed);
    property.reset();
    assert_eq!(property.values(), &[BackgroundAttachment::Scroll]);
}

#[test]
fn clip_and_origin_share_box_keywords() {
    let mut clip = background_clip();
    let mut origin = background_origin();
    assert_eq!(clip.values(), &[BackgroundBox::BorderBox]);
    assert_eq!(origin.values(), &[BackgroundBox::PaddingBox]);

    assert!(clip.validate(&layers(&["Content-Box", "padding-box"])));
    assert_eq!(
        clip.values(),
        &[BackgroundBox::ContentBox, BackgroundBox::PaddingBox]
    );
    assert!(!origin.validate(&keyword("margin-box")));
    assert_eq!(origin.keywords(), vec!["padding-box"]);
}
