use datefix_core::{canonicalize, parse_fragment, FieldOrder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn month_year_becomes_year_month_01(month in "[0-9]{1,2}", year in "[0-9]{4}") {
        let raw = format!("{month}-{year}");
        prop_assert_eq!(canonicalize(&raw).unwrap(), format!("{year}-{month}-01"));
    }

    #[test]
    fn year_month_keeps_order(year in "[0-9]{4}", month in "[0-9]{1,2}") {
        let raw = format!("{year}-{month}");
        let fragment = parse_fragment(&raw).unwrap();
        prop_assert_eq!(fragment.order, FieldOrder::YearMonth);
        prop_assert_eq!(fragment.canonical(), format!("{year}-{month}-01"));
    }

    #[test]
    fn second_pass_is_stable_and_flagged(month in "[0-9]{1,2}", year in "[0-9]{4}") {
        let once = canonicalize(&format!("{month}-{year}")).unwrap();
        let again = parse_fragment(&once).unwrap();
        prop_assert!(again.day_dropped());
        prop_assert_eq!(again.canonical(), once);
    }

    #[test]
    fn day_is_discarded(year in "[0-9]{4}", month in "[0-9]{1,2}", day in "[0-9]{1,2}") {
        let raw = format!("{year}-{month}-{day}");
        prop_assert_eq!(canonicalize(&raw).unwrap(), format!("{year}-{month}-01"));
    }

    #[test]
    fn never_panics(s in ".{0,40}") {
        let _ = parse_fragment(&s);
    }

    #[test]
    fn output_always_ends_with_first_of_month(a in "[^-]{0,6}", b in "[^-]{0,6}") {
        let raw = format!("{a}-{b}");
        let out = canonicalize(&raw).unwrap();
        prop_assert!(out.ends_with("-01"));
    }
}
