//! Length and case constraints, end to end.

use ward_tests::prelude::*;

mod length_bounds {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("length_bounds")
            .kind(DataKind::String)
            .constraints("[MinLength(2)][MaxLength(4)]")
            .round_trip()
            .step("inside", "abc", |a| a.valid())
            .step("too_short", "a", |a| {
                a.failures(1)
                    .ids(&[ErrorId::TooShort])
                    .message("must be at least 2 characters long")
            })
            .step("too_long", "abcde", |a| {
                a.failures(1)
                    .ids(&[ErrorId::TooLong])
                    .message("must be at most 4 characters long")
            })
            .step("lower_edge", "ab", |a| a.valid())
            .step("upper_edge", "abcd", |a| a.valid())
    }

    #[test]
    fn test_min_and_max_length() {
        scenario().run().unwrap();
    }
}

mod results_in_list_order {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("results_in_list_order")
            .kind(DataKind::String)
            .constraints("[MinLength(5)][UpperCase]")
            .member("code")
            .display("Product code")
            .step("both_fail", "ab", |a| {
                a.failures(2)
                    .ids(&[ErrorId::TooShort, ErrorId::NotUpperCase])
                    .produced_by(&["MinLength", "UpperCase"])
                    .member("code")
                    .messages_match(r"^Product code must be ")
            })
            .step("only_case_fails", "abcdef", |a| {
                a.ids(&[ErrorId::NotUpperCase])
            })
            .step("passes", "ABCDEF", |a| a.valid())
    }

    #[test]
    fn test_all_results_reported_in_order() {
        scenario().run().unwrap();
    }
}

mod byte_lengths {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("byte_lengths")
            .kind(DataKind::ByteArray)
            .constraints("[MinLength(1)][MaxLength(3)]")
            .round_trip()
            // "AQID" is three bytes
            .step("three_bytes", "AQID", |a| a.valid())
            // "AQIDBA==" is four bytes
            .step("four_bytes", "AQIDBA==", |a| a.ids(&[ErrorId::TooLong]))
            .step("empty", "", |a| a.ids(&[ErrorId::TooShort]))
    }

    #[test]
    fn test_lengths_count_bytes() {
        scenario().run().unwrap();
    }
}

mod unbounded_max_length {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unbounded_max_length")
            .kind(DataKind::String)
            .constraints("[MaxLength]")
            .round_trip()
            .step("long_text", "x".repeat(10_000), |a| a.valid())
    }

    #[test]
    fn test_max_length_without_parameter() {
        scenario().run().unwrap();
    }
}

mod case_of_characters {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("case_of_characters")
            .kind(DataKind::Char)
            .constraints("[LowerCase]")
            .step("lower", "q", |a| a.valid())
            .step("upper", "Q", |a| a.ids(&[ErrorId::NotLowerCase]))
            .step("digit", "7", |a| a.valid())
    }

    #[test]
    fn test_lower_case_char() {
        scenario().run().unwrap();
    }
}

mod length_configuration_errors {
    use super::*;

    #[test]
    fn test_min_length_requires_one_parameter() {
        Scenario::new("min_length_without_parameter")
            .constraints("[MinLength]")
            .rejected_with(ErrorId::TooFewParameters)
            .run()
            .unwrap();
    }

    #[test]
    fn test_negative_length_is_rejected() {
        Scenario::new("negative_length")
            .constraints("[MaxLength(-1)]")
            .rejected_with(ErrorId::ArgumentOutOfRange)
            .run()
            .unwrap();
    }

    #[test]
    fn test_length_on_integer_kind_is_rejected() {
        Scenario::new("length_on_int")
            .kind(DataKind::Int32)
            .constraints("[MinLength(1)]")
            .rejected_with(ErrorId::DisallowedKind)
            .run()
            .unwrap();
    }
}
