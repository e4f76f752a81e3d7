//! Validated field newtypes for person records.
//!
//! Each field wraps a `String` that has already passed its format check, so
//! holding a field value is proof it is well formed. Construction goes through
//! `parse`, which trims the input and validates it against the field's
//! pattern, returning a [`FieldError`] whose display text doubles as the
//! user-facing constraint message.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Regex patterns for field validation.
static PATTERNS: LazyLock<FieldPatterns> = LazyLock::new(FieldPatterns::new);

struct FieldPatterns {
    name: Regex,
    phone: Regex,
    email: Regex,
    fees: Regex,
    class_id: Regex,
    tag: Regex,
    month_paid: Regex,
}

impl FieldPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            // Alphanumeric words separated by single spaces
            name: Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("static regex must compile"),
            phone: Regex::new(r"^[0-9]{3,}$").expect("static regex must compile"),
            // local-part with a restricted special-character set, dot-separated
            // alphanumeric domain labels, last label at least 2 chars
            email: Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9-]+\.)*[A-Za-z0-9-]{2,}$")
                .expect("static regex must compile"),
            fees: Regex::new(r"^[0-9]+$").expect("static regex must compile"),
            class_id: Regex::new(r"^[A-Za-z0-9]+$").expect("static regex must compile"),
            tag: Regex::new(r"^[A-Za-z0-9]+$").expect("static regex must compile"),
            month_paid: Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])$")
                .expect("static regex must compile"),
        }
    }
}

/// Field format violations.
///
/// The `Display` impl carries the constraint message shown to the user when
/// a command supplies a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    InvalidPhone,
    #[error("Emails should be of the format local-part@domain and adhere to the format constraints")]
    InvalidEmail,
    #[error("Addresses can take any values, and it should not be blank")]
    InvalidAddress,
    #[error("Fees should only contain numbers, and it should not be blank")]
    InvalidFees,
    #[error("Class IDs should be a single alphanumeric token, and it should not be blank")]
    InvalidClassId,
    #[error("Tags names should be alphanumeric")]
    InvalidTag,
    #[error("Months paid should be of the format YYYY-MM with a valid month number")]
    InvalidMonthPaid,
}

macro_rules! impl_display_as_str {
    ($field:ty) => {
        impl fmt::Display for $field {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// A person's name: alphanumeric words and spaces, non-blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.name.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidName)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Name);

/// A phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.phone.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Phone);

/// An email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.email.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Email);

/// A postal address: any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if value.is_empty() {
            Err(FieldError::InvalidAddress)
        } else {
            Ok(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Address);

/// Monthly fees owed, as a non-negative whole amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fees(String);

impl Fees {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.fees.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidFees)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Fees);

/// Identifier of the class a person attends (e.g. `1A`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId(String);

impl ClassId {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.class_id.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidClassId)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(ClassId);

/// A single alphanumeric label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.tag.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidTag)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(Tag);

/// A month for which fees were paid, in `YYYY-MM` form.
///
/// The ordering derived from the inner string matches chronological order
/// because the format is zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPaid(String);

impl MonthPaid {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let value = raw.trim();
        if PATTERNS.month_paid.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidMonthPaid)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display_as_str!(MonthPaid);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_alphanumeric_words() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(Name::parse("David Li 2nd").is_ok());
        assert!(Name::parse("  trimmed  ").is_ok());
    }

    #[test]
    fn test_name_rejects_blank_and_symbols() {
        assert_eq!(Name::parse(""), Err(FieldError::InvalidName));
        assert_eq!(Name::parse("   "), Err(FieldError::InvalidName));
        assert_eq!(Name::parse("peter*"), Err(FieldError::InvalidName));
    }

    #[test]
    fn test_phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("93121534").is_ok());
        assert_eq!(Phone::parse("91"), Err(FieldError::InvalidPhone));
        assert_eq!(Phone::parse("9011p041"), Err(FieldError::InvalidPhone));
        assert_eq!(Phone::parse("9312 1534"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn test_email_format() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a1+be.d@sub.example").is_ok());
        assert_eq!(Email::parse("alice"), Err(FieldError::InvalidEmail));
        assert_eq!(Email::parse("@example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(Email::parse("alice@e"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_address_rejects_blank_only() {
        assert!(Address::parse("Blk 45 Aljunied Street 85, #11-31").is_ok());
        assert_eq!(Address::parse(" "), Err(FieldError::InvalidAddress));
    }

    #[test]
    fn test_fees_digits_only() {
        assert!(Fees::parse("0").is_ok());
        assert!(Fees::parse("300").is_ok());
        assert_eq!(Fees::parse(""), Err(FieldError::InvalidFees));
        assert_eq!(Fees::parse("30.50"), Err(FieldError::InvalidFees));
        assert_eq!(Fees::parse("-10"), Err(FieldError::InvalidFees));
    }

    #[test]
    fn test_class_id_single_token() {
        assert!(ClassId::parse("1A").is_ok());
        assert!(ClassId::parse("class1").is_ok());
        assert_eq!(ClassId::parse("1 A"), Err(FieldError::InvalidClassId));
        assert_eq!(ClassId::parse(""), Err(FieldError::InvalidClassId));
    }

    #[test]
    fn test_tag_alphanumeric_word() {
        assert!(Tag::parse("friends").is_ok());
        assert_eq!(Tag::parse("best friend"), Err(FieldError::InvalidTag));
        assert_eq!(Tag::parse(""), Err(FieldError::InvalidTag));
    }

    #[test]
    fn test_month_paid_format() {
        assert!(MonthPaid::parse("2024-01").is_ok());
        assert!(MonthPaid::parse("2024-12").is_ok());
        assert_eq!(MonthPaid::parse("2024-13"), Err(FieldError::InvalidMonthPaid));
        assert_eq!(MonthPaid::parse("2024-0"), Err(FieldError::InvalidMonthPaid));
        assert_eq!(MonthPaid::parse("24-01"), Err(FieldError::InvalidMonthPaid));
        assert_eq!(MonthPaid::parse("Jan"), Err(FieldError::InvalidMonthPaid));
    }

    #[test]
    fn test_month_paid_orders_chronologically() {
        let jan = MonthPaid::parse("2024-01").unwrap();
        let dec = MonthPaid::parse("2023-12").unwrap();
        assert!(dec < jan);
    }
}
