//! Product validation.
//!
//! The field constraints are declared on [`Product`] through
//! `validator::Validate`. A [`ProductValidator`] holds an ordered list of
//! [`FieldRule`]s and translates the raw validator error codes into
//! [`Violation`]s: one per field, in rule order, naming the first check of the
//! rule that the field failed.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use serde_json::Value;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors as FieldErrors};

use crate::domain::products::models::Product;

/// Prefix every SKU must start with.
pub const SKU_PREFIX: &str = "FAL-";

/// Smallest accepted SKU number.
pub const MIN_SKU_NUMBER: i64 = 1_000_000;

/// Largest accepted SKU number.
pub const MAX_SKU_NUMBER: i64 = 99_999_999;

const MESSAGE_SEPARATOR: &str = " | ";

/// Product field addressed by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `sku`
    Sku,
    /// `name`
    Name,
    /// `brand`
    Brand,
    /// `size`
    Size,
    /// `price`
    Price,
    /// `imageURL`
    ImageUrl,
    /// `altImages`
    AltImages,
}

impl Field {
    /// Label used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sku => "SKU",
            Self::Name => "Name",
            Self::Brand => "Brand",
            Self::Size => "Size",
            Self::Price => "Price",
            Self::ImageUrl => "ImageURL",
            Self::AltImages => "AltImages",
        }
    }

    // Key the derived validator reports errors under.
    fn key(self) -> &'static str {
        match self {
            Self::Sku => "sku",
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Size => "size",
            Self::Price => "price",
            Self::ImageUrl => "image_url",
            Self::AltImages => "alt_images",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A single constraint applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The value is not its zero value.
    Required,

    /// The value is a well-formed SKU.
    Sku,

    /// The value is not empty or whitespace only; numbers must be non-zero.
    NotBlank,

    /// Text holds at least 3 characters.
    MinLength,

    /// Text holds at most 50 characters.
    MaxLength,

    /// The price is at least 1.00.
    MinValue,

    /// The price is at most 99,999,999.00.
    MaxValue,

    /// Text is an absolute URL with a host.
    Url,

    /// Every element of a list is an absolute URL with a host.
    AltImages,
}

impl Check {
    fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Sku => "sku",
            Self::NotBlank => "notblank",
            Self::MinLength | Self::MaxLength => "length",
            Self::MinValue | Self::MaxValue => "range",
            Self::Url => "url",
            Self::AltImages => "altimages",
        }
    }

    // Length and range share one code for both bounds.
    fn matches(self, error: &ValidationError) -> bool {
        error.code == self.code()
            && match self {
                Self::MinLength | Self::MinValue => is_below_minimum(error),
                Self::MaxLength | Self::MaxValue => !is_below_minimum(error),
                _ => true,
            }
    }
}

/// Whether a `length` or `range` error was raised by the lower bound.
fn is_below_minimum(error: &ValidationError) -> bool {
    let Some(value) = error.params.get("value") else {
        return false;
    };

    let min = error.params.get("min");

    if let Some(text) = value.as_str() {
        let length = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);

        return min.and_then(Value::as_u64).is_some_and(|min| length < min);
    }

    match (value.as_f64(), min.and_then(Value::as_f64)) {
        (Some(value), Some(min)) => value < min,
        _ => false,
    }
}

/// Ordered checks for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    field: Field,
    checks: Vec<Check>,
}

impl FieldRule {
    /// Create a rule reporting the first of `checks`, in order, that `field`
    /// failed.
    pub fn new(field: Field, checks: impl IntoIterator<Item = Check>) -> Self {
        Self {
            field,
            checks: checks.into_iter().collect(),
        }
    }

    /// The field this rule applies to.
    pub fn field(&self) -> Field {
        self.field
    }

    fn evaluate(&self, errors: &FieldErrors) -> Option<Violation> {
        let field_errors = errors.field_errors();
        let reported = field_errors.get(self.field.key())?;

        self.checks
            .iter()
            .find(|check| reported.iter().any(|error| check.matches(error)))
            .map(|&check| Violation {
                field: self.field,
                check,
            })
    }
}

/// A failed check on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Field that failed.
    pub field: Field,

    /// Check that failed.
    pub check: Check,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let field = self.field;

        match self.check {
            Check::Required => write!(f, "{field} must have a value"),
            Check::Sku => f.write_str("invalid SKU value"),
            Check::NotBlank => write!(f, "{field} is blank"),
            Check::MinLength => write!(f, "{field} must be at least 3 characters in length"),
            Check::MaxLength => {
                write!(f, "{field} must be a maximum of 50 characters in length")
            }
            Check::MinValue => write!(f, "{field} must be 1.00 or greater"),
            Check::MaxValue => write!(f, "{field} must be 99,999,999.00 or less"),
            Check::Url => write!(f, "{field} is not a valid url value"),
            Check::AltImages => write!(f, "{field} has an invalid url value"),
        }
    }
}

/// All violations found on a product, in rule order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    /// The collected violations.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Human-readable message for every violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Whether a violation was reported for `field`.
    pub fn has_field(&self, field: Field) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.messages().join(MESSAGE_SEPARATOR))
    }
}

impl Error for ValidationErrors {}

/// Product validation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductValidator {
    rules: Vec<FieldRule>,
}

impl ProductValidator {
    /// Build a validator from an explicit rule set.
    pub fn new(rules: impl IntoIterator<Item = FieldRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rules this validator evaluates, in order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate every field of `product`.
    ///
    /// # Errors
    ///
    /// Returns every violation selected by the rules when at least one field
    /// constraint fails.
    pub fn validate(&self, product: &Product) -> Result<(), ValidationErrors> {
        let Err(errors) = product.validate() else {
            return Ok(());
        };

        let violations: Vec<Violation> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(&errors))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        let text = [
            Check::Required,
            Check::NotBlank,
            Check::MinLength,
            Check::MaxLength,
        ];

        Self::new([
            FieldRule::new(Field::Sku, [Check::Required, Check::Sku]),
            FieldRule::new(Field::Name, text),
            FieldRule::new(Field::Brand, text),
            FieldRule::new(Field::Size, [Check::NotBlank]),
            FieldRule::new(
                Field::Price,
                [Check::Required, Check::MinValue, Check::MaxValue],
            ),
            FieldRule::new(Field::ImageUrl, [Check::Required, Check::Url]),
            FieldRule::new(Field::AltImages, [Check::AltImages]),
        ])
    }
}

/// Whether `sku` is `FAL-` followed by a number in the accepted range.
pub fn is_valid_sku(sku: &str) -> bool {
    sku.strip_prefix(SKU_PREFIX)
        .filter(|number| number.bytes().all(|byte| byte.is_ascii_digit()))
        .and_then(|number| number.parse::<i64>().ok())
        .is_some_and(|number| (MIN_SKU_NUMBER..=MAX_SKU_NUMBER).contains(&number))
}

/// Whether `value` parses as an absolute URL with a host.
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

fn check(passed: bool, code: &'static str) -> Result<(), ValidationError> {
    if passed {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

pub(crate) fn required_text(value: &str) -> Result<(), ValidationError> {
    check(!value.is_empty(), "required")
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    check(!value.trim().is_empty(), "notblank")
}

pub(crate) fn sku_format(value: &str) -> Result<(), ValidationError> {
    check(is_valid_sku(value), "sku")
}

pub(crate) fn non_zero_size(value: i64) -> Result<(), ValidationError> {
    check(value != 0, "notblank")
}

pub(crate) fn non_zero_price(value: f64) -> Result<(), ValidationError> {
    check(value.abs() > 0.0, "required")
}

/// Rejects URLs that parse but carry no host, such as `mailto:` links.
pub(crate) fn url_with_host(value: &str) -> Result<(), ValidationError> {
    let missing_host = Url::parse(value).is_ok_and(|url| !url.has_host());

    check(!missing_host, "url")
}

pub(crate) fn alt_image_urls(values: &[String]) -> Result<(), ValidationError> {
    check(
        values.iter().all(|value| is_absolute_url(value)),
        "altimages",
    )
}
