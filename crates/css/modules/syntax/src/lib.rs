//! CSS Syntax Module Level 3 — Parsing and tokenization into component values.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>

#![forbid(unsafe_code)]

use core::error::Error;
use core::fmt;
use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::Delimiter;
use cssparser::ParseError;
use cssparser::ParseErrorKind;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;
use cssparser::Token;
use cssparser::parse_important;
use css_values_units::{
    CssValue, Ident, color_from_hash, parse_color_literal, parse_ident, parse_length,
    parse_number, parse_percentage,
};
use log::debug;

/// Reason declaration text could not be turned into component values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueParseError {
    /// A token that has no component value form (bad string, bad url, stray bracket).
    UnexpectedToken,
    /// A `#` hash that is not a valid hex color.
    InvalidColor,
    /// A declaration with nothing before its end or its `!important`.
    EmptyValue,
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token in value"),
            Self::InvalidColor => formatter.write_str("invalid hex color"),
            Self::EmptyValue => formatter.write_str("empty declaration value"),
        }
    }
}

impl Error for ValueParseError {}

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Tokenized value (without trailing !important).
    pub value: CssValue,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

/// A single style rule with a raw prelude and parsed declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations within the rule block.
    pub declarations: Vec<Declaration>,
}

/// A parsed stylesheet consisting of style rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    /// Top-level style rules in source order.
    pub rules: Vec<StyleRule>,
}

/// Collapse parsed components into a value: one component stays bare, anything else is a list.
fn into_value(mut components: Vec<CssValue>) -> CssValue {
    if components.len() == 1
        && let Some(single) = components.pop()
    {
        return single;
    }
    CssValue::List(components)
}

/// Unwrap our own error out of a cssparser error, treating basic errors as unexpected tokens.
fn value_error(error: ParseError<'_, ValueParseError>) -> ValueParseError {
    match error.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(_) => ValueParseError::UnexpectedToken,
    }
}

/// Parse component values until the parser is exhausted.
///
/// Spec: §5.3.10 Parse a list of component values
fn parse_components(input: &mut Parser<'_, '_>) -> Result<Vec<CssValue>, ValueParseError> {
    let mut components = Vec::new();
    while !input.is_exhausted() {
        components.push(parse_component(input)?);
    }
    Ok(components)
}

/// Parse the components of a declaration value, reporting failures through cssparser.
fn parse_declared_components<'input>(
    input: &mut Parser<'input, '_>,
) -> Result<Vec<CssValue>, ParseError<'input, ValueParseError>> {
    parse_components(input).map_err(|error| input.new_custom_error(error))
}

/// Parse a single component value, skipping leading whitespace and comments.
///
/// Typed literals are tried first through the Values & Units parsers; whatever they decline
/// is mapped token by token.
fn parse_component(input: &mut Parser<'_, '_>) -> Result<CssValue, ValueParseError> {
    input.skip_whitespace();
    if let Ok(color) = input.try_parse(parse_color_literal) {
        return Ok(CssValue::Color(color));
    }
    if let Ok(Ident(keyword)) = input.try_parse(parse_ident) {
        return Ok(CssValue::Keyword(keyword));
    }
    if let Ok(number) = input.try_parse(parse_number) {
        return Ok(CssValue::Number(number));
    }
    if let Ok(percentage) = input.try_parse(parse_percentage) {
        return Ok(CssValue::Percentage(percentage));
    }
    if let Ok(length) = input.try_parse(parse_length) {
        return Ok(CssValue::Length(length));
    }
    let token = input
        .next()
        .map_err(|_| ValueParseError::UnexpectedToken)?
        .clone();
    let component = match token {
        Token::Comma => CssValue::Separator,
        // Lengths are taken above; any other unit stays an opaque dimension.
        Token::Dimension { value, unit, .. } => CssValue::Dimension {
            value,
            unit: unit.as_ref().to_ascii_lowercase(),
        },
        Token::Hash(text) | Token::IDHash(text) => color_from_hash(&text)
            .map(CssValue::Color)
            .ok_or(ValueParseError::InvalidColor)?,
        Token::QuotedString(text) => CssValue::String(text.as_ref().to_owned()),
        Token::UnquotedUrl(url) => CssValue::Url(url.as_ref().to_owned()),
        Token::Delim(delimiter) => CssValue::Delimiter(delimiter),
        Token::Function(name) => parse_function(name.as_ref(), input)?,
        Token::Ident(_)
        | Token::Number { .. }
        | Token::Percentage { .. }
        | Token::AtKeyword(_)
        | Token::WhiteSpace(_)
        | Token::Comment(_)
        | Token::Colon
        | Token::Semicolon
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::CDO
        | Token::CDC
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => return Err(ValueParseError::UnexpectedToken),
    };
    Ok(component)
}

/// Parse the arguments of a function token. `url("...")` collapses to a url value.
fn parse_function(name: &str, input: &mut Parser<'_, '_>) -> Result<CssValue, ValueParseError> {
    let arguments = input
        .parse_nested_block(|nested| {
            parse_components(nested).map_err(|error| nested.new_custom_error(error))
        })
        .map_err(value_error)?;
    if name.eq_ignore_ascii_case("url")
        && let [CssValue::String(url)] = arguments.as_slice()
    {
        return Ok(CssValue::Url(url.clone()));
    }
    Ok(CssValue::Function {
        name: name.to_ascii_lowercase(),
        arguments,
    })
}

/// Tokenize a declaration value into a [`CssValue`].
///
/// Whitespace separates components and commas become [`CssValue::Separator`]. A value with
/// exactly one component is returned bare; an empty or multi-component value is a list.
///
/// # Errors
/// Returns a [`ValueParseError`] if the text contains tokens that have no component form.
pub fn parse_value(text: &str) -> Result<CssValue, ValueParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_components(&mut parser).map(into_value)
}

/// A declaration parser that records property name and its tokenized value.
struct BodyDeclParser;

impl<'input> CssDeclarationParser<'input> for BodyDeclParser {
    type Declaration = Declaration;
    type Error = ValueParseError;

    fn parse_value<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let components = input.parse_until_before(Delimiter::Bang, parse_declared_components)?;
        if components.is_empty() {
            return Err(input.new_custom_error(ValueParseError::EmptyValue));
        }
        let important = input.try_parse(parse_important).is_ok();
        input.expect_exhausted()?;
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value: into_value(components),
            important,
        })
    }
}

impl<'input> CssAtRuleParser<'input> for BodyDeclParser {
    type Prelude = ();
    type AtRule = Declaration; // Not produced
    type Error = ValueParseError;

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        // Not produced by this parser
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Err(())
    }
}

impl<'input> CssQualifiedRuleParser<'input> for BodyDeclParser {
    type Prelude = ();
    type QualifiedRule = Declaration; // Not produced
    type Error = ValueParseError;

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, Declaration, ValueParseError> for BodyDeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Top-level parser that builds `StyleRule` items for qualified rules.
struct TopLevelParser;

impl<'input> CssAtRuleParser<'input> for TopLevelParser {
    type Prelude = ();
    type AtRule = StyleRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        // At-rules are skipped entirely.
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Err(())
    }
}

impl<'input> CssQualifiedRuleParser<'input> for TopLevelParser {
    type Prelude = String; // raw selector/prelude
    type QualifiedRule = StyleRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let start = input.state();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(input.slice_from(start.position()).trim().to_owned())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        let decls = parse_declarations_from_block(input);
        Ok(StyleRule {
            prelude,
            declarations: decls,
        })
    }
}

/// Parse declarations from a rule body, skipping (and logging) the ones that fail to tokenize.
fn parse_declarations_from_block(block: &mut Parser) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    let mut body = BodyDeclParser;
    for item in CssRuleBodyParser::new(block, &mut body) {
        match item {
            Ok(decl) => out.push(decl),
            Err((error, slice)) => {
                debug!("css_syntax: skipping declaration `{}`: {:?}", slice.trim(), error.kind);
            }
        }
    }
    out
}

/// Parse a declaration list such as the body of a `style` attribute.
///
/// Spec: §5.3.8 Parse a list of declarations
pub fn parse_declaration_list(css: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_declarations_from_block(&mut parser)
}

/// Parse a full stylesheet into a `Stylesheet` using cssparser.
///
/// Spec: §5.3.3 Parse a stylesheet
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut top = TopLevelParser;
    let mut sheet = Stylesheet::default();
    for rule in StyleSheetParser::new(&mut parser, &mut top).flatten() {
        sheet.rules.push(rule);
    }
    sheet
}
