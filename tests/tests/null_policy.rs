//! Null values and validation preconditions.

use ward_tests::prelude::*;

mod null_without_tolerant_constraint {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("null_without_tolerant_constraint")
            .kind(DataKind::String)
            .constraints("[MinLength(2)][UpperCase]")
            .member("code")
            .null_step("null", |a| {
                a.failures(1)
                    .ids(&[ErrorId::ValueRequired])
                    .produced_by(&[""])
                    .member("code")
                    .message("code is required.")
            })
    }

    #[test]
    fn test_single_null_result() {
        scenario().run().unwrap();
    }
}

mod null_with_required {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("null_with_required")
            .kind(DataKind::String)
            .constraints("[MinLength(2)][Required][UpperCase]")
            .display("Country code")
            .null_step("null", |a| {
                a.ids(&[ErrorId::ValueRequired])
                    .produced_by(&["Required"])
                    .message("Country code is required.")
            })
            .step("empty", "", |a| {
                a.ids(&[ErrorId::TooShort, ErrorId::ValueRequired])
            })
            .step("present", "NL", |a| a.valid())
    }

    #[test]
    fn test_only_tolerant_constraints_see_null() {
        scenario().run().unwrap();
    }
}

mod required_on_bytes {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("required_on_bytes")
            .kind(DataKind::ByteArray)
            .constraints("[Required]")
            .step("empty", "", |a| a.ids(&[ErrorId::ValueRequired]))
            .step("one_byte", "AA==", |a| a.valid())
            .null_step("null", |a| a.ids(&[ErrorId::ValueRequired]))
    }

    #[test]
    fn test_required_bytes() {
        scenario().run().unwrap();
    }
}

mod required_on_numbers {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("required_on_numbers")
            .kind(DataKind::Int32)
            .constraints("[Required][Range(0,5)]")
            .step("zero_is_present", "0", |a| a.valid())
            .null_step("null", |a| {
                a.ids(&[ErrorId::ValueRequired]).produced_by(&["Required"])
            })
    }

    #[test]
    fn test_required_int() {
        scenario().run().unwrap();
    }
}

mod preconditions {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("preconditions")
            .kind(DataKind::Int32)
            .constraints("[Range(1,9)]")
            .value_step("string_value", Value::String("5".into()), |a| {
                a.error(ErrorId::ValueKindMismatch)
            })
            .value_step("int64_value", Value::Int64(5), |a| {
                a.error(ErrorId::ValueKindMismatch)
            })
            .value_step("int32_value", Value::Int32(5), |a| a.valid())
    }

    #[test]
    fn test_value_of_another_kind_is_a_configuration_error() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_none_kind_is_rejected() {
        Scenario::new("none_kind")
            .kind(DataKind::None)
            .constraints("[Required]")
            .rejected_with(ErrorId::NoneKind)
            .run()
            .unwrap();
    }

    #[test]
    fn test_disallowed_kind_is_rejected() {
        Scenario::new("regex_on_int")
            .kind(DataKind::Int32)
            .constraints("[Required][Regex('x')]")
            .rejected_with(ErrorId::DisallowedKind)
            .run()
            .unwrap();
    }
}
