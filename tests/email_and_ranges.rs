//! Integration tests for email addresses and ranges

use narrow::prelude::*;
use proptest::prelude::*;

#[test]
fn email_from_documented_examples() {
    let address = EmailAddress::create("contact@kotools.org");
    assert_eq!(address.to_string(), "contact@kotools.org");
    assert!(EmailAddress::create_or_none("not-an-email").is_none());

    let short = EmailAddress::create("a@b.c");
    assert_eq!(short.local_part(), "a");
    assert_eq!(short.domain(), "b.c");
}

#[test]
fn email_regex_is_exposed() {
    assert_eq!(EmailAddress::regex().as_str(), EmailAddress::PATTERN);
}

proptest! {
    #[test]
    fn prop_email_round_trip(
        local in "[a-z0-9.+@]{1,12}",
        host in "[a-z0-9@-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let text = format!("{local}@{host}.{tld}");
        if let Some(address) = EmailAddress::create_or_none(&text) {
            let again = EmailAddress::create(&address.to_string());
            prop_assert_eq!(&again, &address);
            prop_assert_eq!(address.to_string(), text);
        }
    }

    #[test]
    fn prop_text_with_whitespace_is_never_an_email(
        left in "[a-z]{1,5}",
        right in "[a-z]{1,5}",
    ) {
        let text = format!("{left} @{right}.org");
        prop_assert!(EmailAddress::create_or_none(&text).is_none());
    }
}

#[test]
fn range_legality() {
    assert!(NotEmptyRange::new(Bound::Inclusive(5), Bound::Inclusive(1)).is_err());
    assert!(NotEmptyRange::new(Bound::Inclusive(1), Bound::Exclusive(1)).is_err());
    assert!(NotEmptyRange::new(Bound::Exclusive(1), Bound::Inclusive(1)).is_err());
    assert!(NotEmptyRange::new(Bound::Exclusive(1), Bound::Exclusive(1)).is_err());

    let point = NotEmptyRange::create(Bound::Inclusive(1), Bound::Inclusive(1));
    assert!(point.contains(&1));
    assert_eq!(point.to_string(), "[1;1]");
}

#[test]
fn range_failure_messages() {
    let error = NotEmptyRange::new(Bound::Inclusive(5), Bound::Exclusive(1)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Range's start should be less than or equal to its end (tried with [5;1[)"
    );
    let error = NotEmptyRange::new(Bound::Exclusive(2), Bound::Exclusive(2)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Range with an exclusive bound should have a start less than its end (tried with ]2;2[)"
    );
}

#[test]
fn canonical_domains() {
    assert_eq!(NegativeInt::range().to_string(), format!("[{};0]", i32::MIN));
    assert_eq!(StrictlyNegativeLong::range().to_string(), format!("[{};-1]", i64::MIN));
    assert_eq!(PositiveInt::range().to_string(), format!("[0;{}]", i32::MAX));
    assert_eq!(NonZeroInt::range().to_string(), format!("[{};{}]", i32::MIN, i32::MAX));
    assert!(std::ptr::eq(NegativeInt::range(), NegativeInt::range()));
}

proptest! {
    #[test]
    fn prop_range_contains_agrees_with_bounds(a in any::<i16>(), b in any::<i16>(), x in any::<i16>()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let range = NotEmptyRange::create(Bound::Inclusive(start), Bound::Inclusive(end));
        prop_assert_eq!(range.contains(&x), start <= x && x <= end);
    }

    #[test]
    fn prop_range_rejects_reversed_bounds(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a > b);
        prop_assert!(NotEmptyRange::create_or_none(Bound::Inclusive(a), Bound::Inclusive(b)).is_none());
        prop_assert!(NotEmptyRange::create_or_none(Bound::Inclusive(b), Bound::Exclusive(a)).is_some());
    }
}
