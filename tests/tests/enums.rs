//! Enum and Type membership, end to end.

use ward_tests::prelude::*;

fn access_catalog() -> EnumCatalog {
    let mut catalog = EnumCatalog::new();
    catalog
        .register(
            EnumDefinition::new("Contoso.Access", DataKind::Byte)
                .flags()
                .member("Read", 1)
                .member("Write", 2)
                .member("Execute", 4)
                .hidden_member("Legacy", 8),
        )
        .unwrap();
    catalog
}

mod flags_table {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("flags_table")
            .kind(DataKind::Int32)
            .constraints("[Enum(Flags,A=1,B=2,C=4)]")
            .round_trip()
            .step("combination", "5", |a| a.valid())
            .step("all", "7", |a| a.valid())
            .step("none_set", "0", |a| a.valid())
            .step("undefined_bit", "8", |a| {
                a.ids(&[ErrorId::InvalidFlags])
                    .produced_by(&["Enum"])
                    .message("contains flags not defined by Enum")
            })
            .step("mixed_undefined_bit", "9", |a| a.ids(&[ErrorId::InvalidFlags]))
    }

    #[test]
    fn test_flags_membership() {
        scenario().run().unwrap();
    }
}

mod plain_table {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("plain_table")
            .kind(DataKind::Int32)
            .constraints("[Enum(A=1,B=2,C=4)]")
            .round_trip()
            .step("member", "4", |a| a.valid())
            .step("combination_is_not_a_member", "3", |a| {
                a.ids(&[ErrorId::NotEnumMember])
                    .message("Value is not a defined value of Enum.")
            })
    }

    #[test]
    fn test_exact_membership() {
        scenario().run().unwrap();
    }
}

mod width_normalization {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("width_normalization")
            .kind(DataKind::SByte)
            .constraints("[Enum(All=0xFF)]")
            .step("signed_reading", "-1", |a| a.valid())
            .step("other", "1", |a| a.ids(&[ErrorId::NotEnumMember]))
    }

    #[test]
    fn test_signed_and_unsigned_readings_match() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_hex_entry_is_canonicalized() {
        Scenario::new("hex_canonical")
            .kind(DataKind::SByte)
            .constraints("[Enum(All=0xFF)]")
            .round_trip()
            .run()
            .unwrap();
    }
}

mod enum_kind {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("enum_kind")
            .kind(DataKind::Enum)
            .constraints("[Enum(Red=0,Green=1,Blue=2)]")
            .round_trip()
            .step("hex_value", "0x1", |a| a.valid())
            .step("unknown", "3", |a| a.ids(&[ErrorId::NotEnumMember]))
    }

    #[test]
    fn test_enum_data_kind() {
        scenario().run().unwrap();
    }
}

mod resolved_type {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("resolved_type")
            .kind(DataKind::Byte)
            .constraints("[Type(Contoso.Access)]")
            .catalog(access_catalog())
            .round_trip()
            .step("read_write", "3", |a| a.valid())
            .step("hidden_member_not_examined", "8", |a| {
                a.ids(&[ErrorId::InvalidFlags])
                    .produced_by(&["Type"])
                    .message("Contoso.Access")
            })
    }

    #[test]
    fn test_type_resolves_through_catalog() {
        scenario().run().unwrap();
    }
}

mod catalog_from_json {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "name": "Contoso.Color",
            "underlying": "Int16",
            "members": [
                { "name": "Red", "value": "1" },
                { "name": "Green", "value": "0x2" },
                { "name": "Crimson", "value": "1", "hidden": true }
            ]
        }
    ]"#;

    pub fn scenario() -> Scenario {
        Scenario::new("catalog_from_json")
            .kind(DataKind::Int16)
            .constraints("[Type(Contoso.Color)]")
            .catalog(EnumCatalog::from_json(CATALOG).unwrap())
            .step("red", "1", |a| a.valid())
            .step("green", "2", |a| a.valid())
            .step("blue", "3", |a| a.ids(&[ErrorId::NotEnumMember]))
    }

    #[test]
    fn test_type_from_json_catalog() {
        scenario().run().unwrap();
    }
}

mod unresolved_type {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unresolved_type")
            .kind(DataKind::Int32)
            .constraints("[Type(Missing.Type)]")
            .catalog(access_catalog())
            .round_trip()
            .step("anything_passes", "12345", |a| a.valid())
    }

    #[test]
    fn test_unresolved_type_disables_check() {
        scenario().run().unwrap();
    }
}

mod enum_configuration_errors {
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
    fn test_invalid_tables() {
        rejects(DataKind::Int32, "[Enum(Flags)]", ErrorId::TooFewParameters);
        rejects(DataKind::Int32, "[Enum(A=1,A=2)]", ErrorId::ArgumentOutOfRange);
        rejects(DataKind::Int32, "[Enum(A=x)]", ErrorId::MalformedParameter);
        rejects(DataKind::Byte, "[Enum(A=300)]", ErrorId::ArgumentOutOfRange);
        rejects(DataKind::String, "[Enum(A=1)]", ErrorId::DisallowedKind);
        rejects(DataKind::Int32, "[Type]", ErrorId::TooFewParameters);
    }
}
