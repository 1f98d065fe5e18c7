//! Property tests for the persisted literal form

use proptest::prelude::*;
use propstore::{escape, literal, ConfigurationStore, Entry, Group, Properties};

fn entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        "(?s).{0,12}".prop_map(Entry::Value),
        prop::collection::vec(("(?s).{0,8}", "(?s).{0,12}"), 0..5)
            .prop_map(|pairs| Entry::Group(pairs.into_iter().collect::<Group>())),
    ]
}

fn properties() -> impl Strategy<Value = Properties> {
    prop::collection::vec(("(?s).{0,8}", entry()), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<Properties>())
}

/// Escape every value so `set_array` stores `raw` verbatim
fn escaped(raw: &Properties) -> Properties {
    raw.iter()
        .map(|(key, entry)| {
            let entry = match entry {
                Entry::Value(value) => Entry::Value(escape(value)),
                Entry::Group(values) => Entry::Group(
                    values
                        .iter()
                        .map(|(name, value)| (name.clone(), escape(value)))
                        .collect(),
                ),
            };
            (key.clone(), entry)
        })
        .collect()
}

proptest! {
    #[test]
    fn serialized_store_reloads_equal(raw in properties()) {
        let mut store = ConfigurationStore::default();
        store.set_array(escaped(&raw));
        prop_assert_eq!(store.properties(), &raw);

        let parsed = literal::parse(&store.serialize()).unwrap();
        let mut reloaded = ConfigurationStore::default();
        reloaded.set_array(parsed);

        prop_assert_eq!(reloaded.properties(), store.properties());
        prop_assert_eq!(reloaded.serialize(), store.serialize());
    }
}
