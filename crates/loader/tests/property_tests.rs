use proptest::prelude::*;
use secret_env_core::MemoryEnv;
use secret_env_loader::{Batch, Record};
use secret_env_storage::FileStorage;

proptest! {
    /// Property: values without a complete placeholder resolve to themselves
    #[test]
    fn property_values_without_placeholders_are_unchanged(raw in "[^}]*") {
        let batch = Batch::new(FileStorage::from_contents("", "").into());
        let env = MemoryEnv::new();
        let record = Record::new("KEY", raw.clone());
        prop_assert_eq!(record.resolve(&batch, &env).unwrap(), raw);
    }

    /// Property: literal text around a placeholder survives verbatim
    #[test]
    fn property_literal_text_is_preserved(
        prefix in "[^#{}]*",
        suffix in "[^#{}]*",
        value in "[a-zA-Z0-9]{1,16}",
    ) {
        let batch = Batch::new(FileStorage::from_contents(&format!("s={value}\n"), "").into());
        let env = MemoryEnv::new();
        let record = Record::new("KEY", format!("{prefix}#{{s}}{suffix}"));
        prop_assert_eq!(
            record.resolve(&batch, &env).unwrap(),
            format!("{prefix}{value}{suffix}")
        );
    }
}
