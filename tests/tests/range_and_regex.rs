//! Range and Regex constraints, end to end.

use ward_tests::prelude::*;

mod integer_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("integer_range")
            .kind(DataKind::Int32)
            .constraints("[Range(1,10)]")
            .round_trip()
            .step("lower_bound", "1", |a| a.valid())
            .step("upper_bound", "10", |a| a.valid())
            .step("below", "0", |a| {
                a.ids(&[ErrorId::OutOfRange])
                    .message("Value must be between 1 and 10.")
            })
            .step("above", "11", |a| a.ids(&[ErrorId::OutOfRange]))
            .step("int_min", "-2147483648", |a| a.ids(&[ErrorId::OutOfRange]))
    }

    #[test]
    fn test_inclusive_bounds() {
        scenario().run().unwrap();
    }
}

mod full_width_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("full_width_range")
            .kind(DataKind::UInt64)
            .constraints("[Range(0,18446744073709551615)]")
            .round_trip()
            .step("zero", "0", |a| a.valid())
            .step("max", "18446744073709551615", |a| a.valid())
    }

    #[test]
    fn test_unsigned_extremes() {
        scenario().run().unwrap();
    }
}

mod float_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("float_range")
            .kind(DataKind::Double)
            .constraints("[Range(0,1)]")
            .step("inside", "0.5", |a| a.valid())
            .step("nan_is_outside", "NaN", |a| a.ids(&[ErrorId::OutOfRange]))
            .step("infinity_is_outside", "Infinity", |a| a.ids(&[ErrorId::OutOfRange]))
    }

    #[test]
    fn test_double_range() {
        scenario().run().unwrap();
    }
}

mod decimal_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("decimal_range")
            .kind(DataKind::Decimal)
            .constraints("[Range(0.5,1.25)]")
            .round_trip()
            .step("trailing_zero", "1.250", |a| a.valid())
            .step("above", "1.26", |a| a.ids(&[ErrorId::OutOfRange]))
    }

    #[test]
    fn test_decimal_range() {
        scenario().run().unwrap();
    }
}

mod date_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("date_range")
            .kind(DataKind::DateTimeOffset)
            .constraints("[Range(2024-01-01T00:00:00+00:00,2024-12-31T23:59:59+00:00)]")
            .round_trip()
            .step("same_instant_other_offset", "2024-01-01T01:00:00+01:00", |a| a.valid())
            .step("midyear", "2024-06-01T12:00:00+02:00", |a| a.valid())
            .step("next_year", "2025-01-01T00:00:00+00:00", |a| {
                a.ids(&[ErrorId::OutOfRange])
            })
    }

    #[test]
    fn test_date_range_compares_instants() {
        scenario().run().unwrap();
    }
}

mod duration_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("duration_range")
            .kind(DataKind::TimeSpan)
            .constraints("[Range(00:00:01,1.00:00:00)]")
            .round_trip()
            .step("half_day", "12:00:00", |a| a.valid())
            .step("half_second", "00:00:00.5", |a| a.ids(&[ErrorId::OutOfRange]))
            .step("two_days", "2.00:00:00", |a| a.ids(&[ErrorId::OutOfRange]))
    }

    #[test]
    fn test_timespan_range() {
        scenario().run().unwrap();
    }
}

mod char_range {
    use super::*;

    #[test]
    fn test_char_range() {
        Scenario::new("char_range")
            .kind(DataKind::Char)
            .constraints("[Range(a,f)]")
            .step("inside", "c", |a| a.valid())
            .step("outside", "z", |a| a.ids(&[ErrorId::OutOfRange]))
            .run()
            .unwrap();
    }
}

mod pattern {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("pattern")
            .kind(DataKind::String)
            .constraints("[Regex('^[A-Z]{3}$')]")
            .round_trip()
            .step("match", "ABC", |a| a.valid())
            .step("lower", "abc", |a| {
                a.ids(&[ErrorId::PatternMismatch])
                    .message("does not match the pattern '^[A-Z]{3}$'")
            })
    }

    #[test]
    fn test_anchored_pattern() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_unanchored_pattern_matches_anywhere() {
        Scenario::new("unanchored")
            .constraints(r"[Regex(\d+)]")
            .round_trip()
            .step("digits_inside", "abc123def", |a| a.valid())
            .step("no_digits", "abcdef", |a| a.ids(&[ErrorId::PatternMismatch]))
            .run()
            .unwrap();
    }

    #[test]
    fn test_case_insensitive_flag() {
        Scenario::new("case_insensitive")
            .constraints("[Regex('^[a-z]+$',i)]")
            .round_trip()
            .step("upper", "ABC", |a| a.valid())
            .run()
            .unwrap();
    }

    #[test]
    fn test_pattern_on_uri() {
        Scenario::new("uri_pattern")
            .kind(DataKind::Uri)
            .constraints("[Regex(^https://)][MaxLength(40)]")
            .step("secure", "https://example.com/", |a| a.valid())
            .step("plain", "http://example.com/", |a| {
                a.ids(&[ErrorId::PatternMismatch])
            })
            .run()
            .unwrap();
    }
}

mod configuration_errors {
    use super::*;

    fn rejects(kind: DataKind, notation: &str, id: ErrorId) {
        Scenario::new(notation)
            .kind(kind)
            .constraints(notation)
            .rejected_with(id)
            .run()
            .unwrap();
    }

    #[test]
    fn test_range_errors() {
        rejects(DataKind::Int32, "[Range(1)]", ErrorId::TooFewParameters);
        rejects(DataKind::Int32, "[Range(1,2,3)]", ErrorId::TooManyParameters);
        rejects(DataKind::Int32, "[Range(10,1)]", ErrorId::ArgumentOutOfRange);
        rejects(DataKind::Int32, "[Range(a,b)]", ErrorId::MalformedParameter);
        rejects(DataKind::Byte, "[Range(0,256)]", ErrorId::MalformedParameter);
        rejects(DataKind::String, "[Range(a,b)]", ErrorId::DisallowedKind);
    }

    #[test]
    fn test_regex_errors() {
        rejects(DataKind::String, "[Regex('(')]", ErrorId::InvalidPattern);
        rejects(DataKind::String, "[Regex('')]", ErrorId::EmptyArgument);
        rejects(DataKind::String, "[Regex(a,z)]", ErrorId::ArgumentOutOfRange);
        rejects(DataKind::Int32, "[Regex(a)]", ErrorId::DisallowedKind);
    }
}
