//! Typed literal values
//!
//! The value model for the engine: a literal is a lexical form tagged with
//! one of the supported XSD datatypes, and exposes kind predicates, typed
//! projections, and a total order over comparable datatypes.
//!
//! Projections use the usual widening sets: `as_int` accepts byte, short,
//! and int lexicals; `as_double` accepts every numeric kind. Projecting or
//! comparing across incompatible kinds is a literal-type error, never a
//! silent coercion.

use crate::constants::namespaces;
use crate::error::{SwrlError, SwrlResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The supported literal datatypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoreDatatype {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    AnyUri,
    Date,
    Time,
    DateTime,
    Duration,
}

impl CoreDatatype {
    /// The XSD local name of this datatype
    pub fn local_name(&self) -> &'static str {
        match self {
            CoreDatatype::Boolean => "boolean",
            CoreDatatype::Byte => "byte",
            CoreDatatype::Short => "short",
            CoreDatatype::Int => "int",
            CoreDatatype::Long => "long",
            CoreDatatype::Float => "float",
            CoreDatatype::Double => "double",
            CoreDatatype::String => "string",
            CoreDatatype::AnyUri => "anyURI",
            CoreDatatype::Date => "date",
            CoreDatatype::Time => "time",
            CoreDatatype::DateTime => "dateTime",
            CoreDatatype::Duration => "duration",
        }
    }

    /// The full XSD IRI string of this datatype
    pub fn iri_str(&self) -> String {
        format!("{}{}", namespaces::XSD, self.local_name())
    }

    /// Resolve a datatype from a full XSD IRI string
    pub fn from_iri_str(iri: &str) -> Option<Self> {
        let local_name = iri.strip_prefix(namespaces::XSD)?;
        Self::from_local_name(local_name)
    }

    /// Resolve a datatype from an XSD local name
    pub fn from_local_name(local_name: &str) -> Option<Self> {
        match local_name {
            "boolean" => Some(CoreDatatype::Boolean),
            "byte" => Some(CoreDatatype::Byte),
            "short" => Some(CoreDatatype::Short),
            "int" => Some(CoreDatatype::Int),
            "long" => Some(CoreDatatype::Long),
            "float" => Some(CoreDatatype::Float),
            "double" => Some(CoreDatatype::Double),
            "string" => Some(CoreDatatype::String),
            "anyURI" => Some(CoreDatatype::AnyUri),
            "date" => Some(CoreDatatype::Date),
            "time" => Some(CoreDatatype::Time),
            "dateTime" => Some(CoreDatatype::DateTime),
            "duration" => Some(CoreDatatype::Duration),
            _ => None,
        }
    }

    /// True exactly for byte, short, int, long, float, and double
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CoreDatatype::Byte
                | CoreDatatype::Short
                | CoreDatatype::Int
                | CoreDatatype::Long
                | CoreDatatype::Float
                | CoreDatatype::Double
        )
    }

    /// True for the integer-valued numeric kinds
    #[inline]
    pub fn is_integer_kind(&self) -> bool {
        matches!(
            self,
            CoreDatatype::Byte | CoreDatatype::Short | CoreDatatype::Int | CoreDatatype::Long
        )
    }
}

impl fmt::Display for CoreDatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xsd:{}", self.local_name())
    }
}

/// An xsd:duration value
///
/// Year/month components are carried as a month count and day/time components
/// as fractional seconds. The order over durations is (months, seconds)
/// lexicographic, which is deterministic for mixed duration forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XsdDuration {
    months: i64,
    seconds: f64,
}

impl XsdDuration {
    /// Create a duration from a month count and fractional seconds
    pub fn new(months: i64, seconds: f64) -> Self {
        XsdDuration { months, seconds }
    }

    /// Parse the `-PnYnMnDTnHnMnS` lexical form
    pub fn parse(lexical: &str) -> SwrlResult<Self> {
        let error = || SwrlError::LiteralType {
            datatype: format!("\"{lexical}\""),
            requested: "xsd:duration".to_string(),
        };

        let (negative, rest) = match lexical.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lexical),
        };
        let rest = rest.strip_prefix('P').ok_or_else(error)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) if !time.is_empty() => (date, Some(time)),
            Some(_) => return Err(error()),
            None => (rest, None),
        };

        let mut months: i64 = 0;
        let mut seconds: f64 = 0.0;
        let mut component_seen = false;

        let mut number = String::new();
        for ch in date_part.chars() {
            if ch.is_ascii_digit() {
                number.push(ch);
                continue;
            }
            let value: i64 = number.parse().map_err(|_| error())?;
            number.clear();
            component_seen = true;
            match ch {
                'Y' => months += value * 12,
                'M' => months += value,
                'D' => seconds += value as f64 * 86_400.0,
                _ => return Err(error()),
            }
        }
        if !number.is_empty() {
            return Err(error());
        }

        if let Some(time_part) = time_part {
            for ch in time_part.chars() {
                if ch.is_ascii_digit() || ch == '.' {
                    number.push(ch);
                    continue;
                }
                let value: f64 = number.parse().map_err(|_| error())?;
                number.clear();
                component_seen = true;
                match ch {
                    'H' => seconds += value * 3_600.0,
                    'M' => seconds += value * 60.0,
                    'S' => seconds += value,
                    _ => return Err(error()),
                }
            }
            if !number.is_empty() {
                return Err(error());
            }
        }

        if !component_seen {
            return Err(error());
        }
        if negative {
            months = -months;
            seconds = -seconds;
        }
        Ok(XsdDuration { months, seconds })
    }

    /// Month component count
    pub fn months(&self) -> i64 {
        self.months
    }

    /// Day/time component as fractional seconds
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Deterministic order: months first, then seconds
    pub fn compare(&self, other: &Self) -> Ordering {
        self.months
            .cmp(&other.months)
            .then(self.seconds.total_cmp(&other.seconds))
    }
}

/// A typed literal value
///
/// Stores the lexical form alongside its datatype; the lexical form is
/// validated against the datatype at construction, so projections on a
/// matching datatype always succeed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The lexical value
    lexical_form: String,
    /// The datatype tag
    datatype: CoreDatatype,
}

impl Literal {
    /// Create a literal from a lexical form and datatype, validating the form
    pub fn new<S: Into<String>>(lexical_form: S, datatype: CoreDatatype) -> SwrlResult<Self> {
        let literal = Literal {
            lexical_form: lexical_form.into(),
            datatype,
        };
        literal.validate()?;
        Ok(literal)
    }

    fn validate(&self) -> SwrlResult<()> {
        match self.datatype {
            CoreDatatype::Boolean => self.as_boolean().map(|_| ()),
            CoreDatatype::Byte => self.as_byte().map(|_| ()),
            CoreDatatype::Short => self.as_short().map(|_| ()),
            CoreDatatype::Int => self.as_int().map(|_| ()),
            CoreDatatype::Long => self.as_long().map(|_| ()),
            CoreDatatype::Float => self.as_float().map(|_| ()),
            CoreDatatype::Double => self.as_double().map(|_| ()),
            CoreDatatype::String | CoreDatatype::AnyUri => Ok(()),
            CoreDatatype::Date => self.as_date().map(|_| ()),
            CoreDatatype::Time => self.as_time().map(|_| ()),
            CoreDatatype::DateTime => self.as_date_time().map(|_| ()),
            CoreDatatype::Duration => self.as_duration().map(|_| ()),
        }
    }

    /// Create an xsd:boolean literal
    pub fn from_boolean(value: bool) -> Self {
        Literal {
            lexical_form: value.to_string(),
            datatype: CoreDatatype::Boolean,
        }
    }

    /// Create an xsd:byte literal
    pub fn from_byte(value: i8) -> Self {
        Literal {
            lexical_form: value.to_string(),
            datatype: CoreDatatype::Byte,
        }
    }

    /// Create an xsd:short literal
    pub fn from_short(value: i16) -> Self {
        Literal {
            lexical_form: value.to_string(),
            datatype: CoreDatatype::Short,
        }
    }

    /// Create an xsd:int literal
    pub fn from_int(value: i32) -> Self {
        Literal {
            lexical_form: value.to_string(),
            datatype: CoreDatatype::Int,
        }
    }

    /// Create an xsd:long literal
    pub fn from_long(value: i64) -> Self {
        Literal {
            lexical_form: value.to_string(),
            datatype: CoreDatatype::Long,
        }
    }

    /// Create an xsd:float literal
    pub fn from_float(value: f32) -> Self {
        Literal {
            lexical_form: format_float(f64::from(value)),
            datatype: CoreDatatype::Float,
        }
    }

    /// Create an xsd:double literal
    pub fn from_double(value: f64) -> Self {
        Literal {
            lexical_form: format_float(value),
            datatype: CoreDatatype::Double,
        }
    }

    /// Create an xsd:string literal
    pub fn from_string<S: Into<String>>(value: S) -> Self {
        Literal {
            lexical_form: value.into(),
            datatype: CoreDatatype::String,
        }
    }

    /// Create an xsd:anyURI literal
    pub fn from_any_uri<S: Into<String>>(value: S) -> Self {
        Literal {
            lexical_form: value.into(),
            datatype: CoreDatatype::AnyUri,
        }
    }

    /// Create an xsd:date literal
    pub fn from_date(value: NaiveDate) -> Self {
        Literal {
            lexical_form: value.format("%Y-%m-%d").to_string(),
            datatype: CoreDatatype::Date,
        }
    }

    /// Create an xsd:time literal
    pub fn from_time(value: NaiveTime) -> Self {
        Literal {
            lexical_form: value.format("%H:%M:%S%.f").to_string(),
            datatype: CoreDatatype::Time,
        }
    }

    /// Create an xsd:dateTime literal
    pub fn from_date_time(value: NaiveDateTime) -> Self {
        Literal {
            lexical_form: value.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            datatype: CoreDatatype::DateTime,
        }
    }

    /// Create an xsd:duration literal
    pub fn from_duration_lexical<S: Into<String>>(lexical_form: S) -> SwrlResult<Self> {
        Literal::new(lexical_form, CoreDatatype::Duration)
    }

    /// Get the lexical form of the literal
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// Get the datatype of the literal
    pub fn datatype(&self) -> CoreDatatype {
        self.datatype
    }

    /// True exactly for the numeric datatypes
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.datatype.is_numeric()
    }

    /// True for byte, short, int, and long
    #[inline]
    pub fn is_integer_kind(&self) -> bool {
        self.datatype.is_integer_kind()
    }

    /// True for xsd:boolean
    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.datatype == CoreDatatype::Boolean
    }

    /// True for xsd:string
    #[inline]
    pub fn is_string(&self) -> bool {
        self.datatype == CoreDatatype::String
    }

    /// True for xsd:anyURI
    #[inline]
    pub fn is_any_uri(&self) -> bool {
        self.datatype == CoreDatatype::AnyUri
    }

    /// True for xsd:date
    #[inline]
    pub fn is_date(&self) -> bool {
        self.datatype == CoreDatatype::Date
    }

    /// True for xsd:time
    #[inline]
    pub fn is_time(&self) -> bool {
        self.datatype == CoreDatatype::Time
    }

    /// True for xsd:dateTime
    #[inline]
    pub fn is_date_time(&self) -> bool {
        self.datatype == CoreDatatype::DateTime
    }

    /// True for xsd:duration
    #[inline]
    pub fn is_duration(&self) -> bool {
        self.datatype == CoreDatatype::Duration
    }

    fn type_error(&self, requested: &str) -> SwrlError {
        SwrlError::LiteralType {
            datatype: self.datatype.to_string(),
            requested: requested.to_string(),
        }
    }

    /// Project as bool; compatible with xsd:boolean only
    pub fn as_boolean(&self) -> SwrlResult<bool> {
        if self.datatype != CoreDatatype::Boolean {
            return Err(self.type_error("boolean"));
        }
        match self.lexical_form.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(self.type_error("boolean")),
        }
    }

    /// Project as i8; compatible with xsd:byte only
    pub fn as_byte(&self) -> SwrlResult<i8> {
        if self.datatype != CoreDatatype::Byte {
            return Err(self.type_error("byte"));
        }
        self.parse_integer()
    }

    /// Project as i16; compatible with xsd:byte and xsd:short
    pub fn as_short(&self) -> SwrlResult<i16> {
        if !matches!(self.datatype, CoreDatatype::Byte | CoreDatatype::Short) {
            return Err(self.type_error("short"));
        }
        self.parse_integer()
    }

    /// Project as i32; compatible with xsd:byte, xsd:short, and xsd:int
    pub fn as_int(&self) -> SwrlResult<i32> {
        if !matches!(
            self.datatype,
            CoreDatatype::Byte | CoreDatatype::Short | CoreDatatype::Int
        ) {
            return Err(self.type_error("int"));
        }
        self.parse_integer()
    }

    /// Project as i64; compatible with every integer kind
    pub fn as_long(&self) -> SwrlResult<i64> {
        if !self.datatype.is_integer_kind() {
            return Err(self.type_error("long"));
        }
        self.parse_integer()
    }

    /// Project as f32; compatible with the integer kinds and xsd:float
    pub fn as_float(&self) -> SwrlResult<f32> {
        if !(self.datatype.is_integer_kind() || self.datatype == CoreDatatype::Float) {
            return Err(self.type_error("float"));
        }
        parse_float_lexical(&self.lexical_form)
            .map(|value| value as f32)
            .ok_or_else(|| self.type_error("float"))
    }

    /// Project as f64; compatible with every numeric kind
    pub fn as_double(&self) -> SwrlResult<f64> {
        if !self.datatype.is_numeric() {
            return Err(self.type_error("double"));
        }
        parse_float_lexical(&self.lexical_form).ok_or_else(|| self.type_error("double"))
    }

    /// Project as a string slice; compatible with xsd:string only
    pub fn as_string(&self) -> SwrlResult<&str> {
        if self.datatype != CoreDatatype::String {
            return Err(self.type_error("string"));
        }
        Ok(&self.lexical_form)
    }

    /// Project as a URI string; compatible with xsd:anyURI only
    pub fn as_any_uri(&self) -> SwrlResult<&str> {
        if self.datatype != CoreDatatype::AnyUri {
            return Err(self.type_error("anyURI"));
        }
        Ok(&self.lexical_form)
    }

    /// Project as a calendar date; compatible with xsd:date only
    pub fn as_date(&self) -> SwrlResult<NaiveDate> {
        if self.datatype != CoreDatatype::Date {
            return Err(self.type_error("date"));
        }
        NaiveDate::parse_from_str(&self.lexical_form, "%Y-%m-%d")
            .map_err(|_| self.type_error("date"))
    }

    /// Project as a time of day; compatible with xsd:time only
    pub fn as_time(&self) -> SwrlResult<NaiveTime> {
        if self.datatype != CoreDatatype::Time {
            return Err(self.type_error("time"));
        }
        NaiveTime::parse_from_str(&self.lexical_form, "%H:%M:%S%.f")
            .map_err(|_| self.type_error("time"))
    }

    /// Project as a timestamp; compatible with xsd:dateTime only
    ///
    /// Offset forms are normalized to their UTC instant.
    pub fn as_date_time(&self) -> SwrlResult<NaiveDateTime> {
        if self.datatype != CoreDatatype::DateTime {
            return Err(self.type_error("dateTime"));
        }
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&self.lexical_form) {
            return Ok(with_offset.naive_utc());
        }
        NaiveDateTime::parse_from_str(&self.lexical_form, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| self.type_error("dateTime"))
    }

    /// Project as a duration; compatible with xsd:duration only
    pub fn as_duration(&self) -> SwrlResult<XsdDuration> {
        if self.datatype != CoreDatatype::Duration {
            return Err(self.type_error("duration"));
        }
        XsdDuration::parse(&self.lexical_form)
    }

    fn parse_integer<T: std::str::FromStr>(&self) -> SwrlResult<T> {
        self.lexical_form
            .trim()
            .parse()
            .map_err(|_| self.type_error(self.datatype.local_name()))
    }

    /// Total order over comparable literals
    ///
    /// Numerics compare in double precision, except that two integer-kinded
    /// values widen to i64 so magnitudes past the double mantissa still
    /// compare exactly. Temporal kinds compare with the same kind, strings
    /// with strings, URIs with URIs, booleans with booleans. Any other
    /// pairing is a literal-type error.
    pub fn compare(&self, other: &Literal) -> SwrlResult<Ordering> {
        if self.is_numeric() && other.is_numeric() {
            if self.is_integer_kind() && other.is_integer_kind() {
                return Ok(self.as_long()?.cmp(&other.as_long()?));
            }
            return Ok(self.as_double()?.total_cmp(&other.as_double()?));
        }
        match (self.datatype, other.datatype) {
            (CoreDatatype::String, CoreDatatype::String) => {
                Ok(self.lexical_form.cmp(&other.lexical_form))
            }
            (CoreDatatype::AnyUri, CoreDatatype::AnyUri) => {
                Ok(self.lexical_form.cmp(&other.lexical_form))
            }
            (CoreDatatype::Boolean, CoreDatatype::Boolean) => {
                Ok(self.as_boolean()?.cmp(&other.as_boolean()?))
            }
            (CoreDatatype::Date, CoreDatatype::Date) => Ok(self.as_date()?.cmp(&other.as_date()?)),
            (CoreDatatype::Time, CoreDatatype::Time) => Ok(self.as_time()?.cmp(&other.as_time()?)),
            (CoreDatatype::DateTime, CoreDatatype::DateTime) => {
                Ok(self.as_date_time()?.cmp(&other.as_date_time()?))
            }
            (CoreDatatype::Duration, CoreDatatype::Duration) => {
                Ok(self.as_duration()?.compare(&other.as_duration()?))
            }
            _ => Err(SwrlError::LiteralType {
                datatype: self.datatype.to_string(),
                requested: format!("comparison with {}", other.datatype),
            }),
        }
    }

    /// True when `compare` with the other literal would succeed
    pub fn is_comparable_with(&self, other: &Literal) -> bool {
        if self.is_numeric() && other.is_numeric() {
            return true;
        }
        self.datatype == other.datatype
    }
}

/// Quoted form: strings, URIs, and temporal values quoted; numerics and
/// booleans bare.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.datatype {
            CoreDatatype::String
            | CoreDatatype::AnyUri
            | CoreDatatype::Date
            | CoreDatatype::Time
            | CoreDatatype::DateTime
            | CoreDatatype::Duration => write!(f, "\"{}\"", self.lexical_form),
            _ => write!(f, "{}", self.lexical_form),
        }
    }
}

/// Parse a float lexical form, accepting the XSD `INF`/`-INF`/`NaN` spellings
fn parse_float_lexical(lexical: &str) -> Option<f64> {
    match lexical.trim() {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        trimmed => trimmed.parse().ok(),
    }
}

/// Render a float the way XSD lexical forms expect
fn format_float(value: f64) -> String {
    if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_predicate_matches_numeric_kinds() {
        assert!(Literal::from_byte(1).is_numeric());
        assert!(Literal::from_double(1.5).is_numeric());
        assert!(!Literal::from_string("x").is_numeric());
        assert!(!Literal::from_boolean(true).is_numeric());
    }

    #[test]
    fn test_widening_projections() {
        let byte = Literal::from_byte(42);
        assert_eq!(byte.as_int().unwrap(), 42);
        assert_eq!(byte.as_long().unwrap(), 42);
        assert_eq!(byte.as_double().unwrap(), 42.0);

        let long = Literal::from_long(42);
        assert!(long.as_int().is_err());
    }

    #[test]
    fn test_projection_type_errors() {
        let s = Literal::from_string("hello");
        assert!(matches!(s.as_double(), Err(SwrlError::LiteralType { .. })));
        assert!(matches!(s.as_boolean(), Err(SwrlError::LiteralType { .. })));
        assert_eq!(s.as_string().unwrap(), "hello");
    }

    #[test]
    fn test_large_integer_comparison_is_exact() {
        // Adjacent longs past the double mantissa collapse in f64
        let a = Literal::from_long(9_007_199_254_740_993);
        let b = Literal::from_long(9_007_199_254_740_992);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        let int = Literal::from_int(3);
        let double = Literal::from_double(3.5);
        assert_eq!(int.compare(&double).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_incompatible_comparison_is_error() {
        let s = Literal::from_string("1");
        let i = Literal::from_int(1);
        assert!(matches!(s.compare(&i), Err(SwrlError::LiteralType { .. })));

        let date = Literal::new("2024-01-01", CoreDatatype::Date).unwrap();
        let time = Literal::new("12:00:00", CoreDatatype::Time).unwrap();
        assert!(matches!(
            date.compare(&time),
            Err(SwrlError::LiteralType { .. })
        ));
    }

    #[test]
    fn test_duration_parsing_and_order() {
        let short = Literal::from_duration_lexical("P1YT30S").unwrap();
        let long = Literal::from_duration_lexical("P2Y").unwrap();
        assert_eq!(short.compare(&long).unwrap(), Ordering::Less);

        let negative = Literal::from_duration_lexical("-P1D").unwrap();
        let positive = Literal::from_duration_lexical("P1D").unwrap();
        assert_eq!(negative.compare(&positive).unwrap(), Ordering::Less);

        assert!(Literal::from_duration_lexical("P").is_err());
        assert!(Literal::from_duration_lexical("1Y").is_err());
    }

    #[test]
    fn test_quoted_form() {
        assert_eq!(Literal::from_string("ab").to_string(), "\"ab\"");
        assert_eq!(Literal::from_int(7).to_string(), "7");
        assert_eq!(Literal::from_boolean(true).to_string(), "true");
        assert_eq!(
            Literal::new("2024-01-01", CoreDatatype::Date)
                .unwrap()
                .to_string(),
            "\"2024-01-01\""
        );
    }

    #[test]
    fn test_lexical_validation() {
        assert!(Literal::new("abc", CoreDatatype::Int).is_err());
        assert!(Literal::new("128", CoreDatatype::Byte).is_err());
        assert!(Literal::new("127", CoreDatatype::Byte).is_ok());
        assert!(Literal::new("2024-13-40", CoreDatatype::Date).is_err());
        assert!(Literal::new("INF", CoreDatatype::Double).is_ok());
    }
}
