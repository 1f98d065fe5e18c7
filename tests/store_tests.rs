//! Store behavior tests
//!
//! Exercises the public store API end to end: set/get/remove/flush, the
//! case policy, bulk merges, and serialization back through the reader.

use pretty_assertions::assert_eq;
use propstore::{literal, ConfigurationStore, Entry, Lookup, Properties, Result};
use rstest::rstest;

fn props(json: &str) -> Properties {
    serde_json::from_str(json).unwrap()
}

#[rstest]
#[case("sitename", "My Site")]
#[case("empty", "")]
#[case("unicode", "héllo wörld")]
#[case("", "empty name")]
fn test_set_then_get(#[case] name: &str, #[case] value: &str) -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set(name, value, None)?;

    assert_eq!(store.properties().get(name), Some(&Entry::from(value)));
    if !name.is_empty() {
        assert_eq!(store.get(Some(name), None), Some(Lookup::Value(value)));
    }
    Ok(())
}

#[test]
fn test_grouped_value_is_scoped_to_its_group() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("timezone", "+10:00", Some("region"))?;

    assert_eq!(store.value("timezone", Some("region")), Some("+10:00"));
    assert_eq!(store.get(Some("timezone"), None), None);

    store.set("timezone", "UTC", None)?;
    assert_eq!(store.value("timezone", None), Some("UTC"));
    assert_eq!(store.value("timezone", Some("region")), Some("+10:00"));
    Ok(())
}

#[test]
fn test_remove_then_get() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("debug", "1", None)?;
    store.set("a", "1", Some("g"))?;
    store.set("b", "2", Some("g"))?;

    store.remove("debug", None);
    store.remove("a", Some("g"));

    assert_eq!(store.get(Some("debug"), None), None);
    assert_eq!(store.get(Some("a"), Some("g")), None);
    assert_eq!(store.value("b", Some("g")), Some("2"));

    // removing something missing is a no-op
    assert_eq!(store.remove("missing", None), None);
    assert_eq!(store.remove("missing", Some("nope")), None);
    Ok(())
}

#[test]
fn test_flush_then_get_is_empty() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("sitename", "My Site", Some("general"))?;
    store.flush();

    let all = store.get(None, None).and_then(|found| found.as_all()).unwrap();
    assert!(all.is_empty());
    Ok(())
}

#[test]
fn test_lowercase_policy_folds_both_spellings() -> Result<()> {
    let mut store = ConfigurationStore::new(true);
    store.set("Foo", "x", None)?;

    assert_eq!(store.value("foo", None), Some("x"));
    assert_eq!(store.value("Foo", None), Some("x"));

    store.remove("FOO", None);
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_set_array_then_grouped_get() {
    let mut store = ConfigurationStore::default();
    store.set_array(props(r#"{"region": {"timezone": "+10:00"}}"#));

    assert_eq!(store.value("timezone", Some("region")), Some("+10:00"));
}

#[test]
fn test_documented_scenario() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("sitename", "My Site", Some("general"))?;
    store.set("debug", "1", None)?;

    let expected = props(r#"{"general": {"sitename": "My Site"}, "debug": "1"}"#);
    assert_eq!(store.get(None, None), Some(Lookup::All(&expected)));

    let text = store.serialize();
    assert!(text.contains("###### GENERAL ######"));
    assert!(text.contains("'sitename' => 'My Site',"));
    assert!(text.contains("'debug' => '1',"));

    let mut reloaded = ConfigurationStore::default();
    reloaded.set_array(literal::parse(&text)?);
    assert_eq!(reloaded.properties(), &expected);
    Ok(())
}

#[test]
fn test_serialization_keeps_insertion_order() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("z", "1", Some("second"))?;
    store.set("b", "1", Some("first"))?;
    store.set("a", "1", Some("first"))?;
    store.set("y", "2", Some("second"))?;

    let text = store.serialize();
    let position = |needle: &str| text.find(needle).unwrap();

    assert!(position("'second'") < position("'first'"));
    assert!(position("'z'") < position("'y'"));
    assert!(position("'b'") < position("'a'"));
    Ok(())
}

#[test]
fn test_escaped_input_round_trips() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("path", "C:\\\\www\\\\site", Some("paths"))?;
    store.set("motto", "it\\'s \\\"quoted\\\"", Some("paths"))?;

    assert_eq!(store.value("path", Some("paths")), Some("C:\\www\\site"));
    assert_eq!(store.value("motto", Some("paths")), Some("it's \"quoted\""));

    let mut reloaded = ConfigurationStore::default();
    reloaded.set_array(literal::parse(&store.serialize())?);
    assert_eq!(reloaded, store);
    Ok(())
}

#[rstest]
#[case("it's", "o'clock")]
#[case("C:\\dir", "back\\slash")]
#[case("say \"hi\"", "\"quoted\"")]
#[case("nul\0name", "nul\0group")]
fn test_keys_with_escapable_characters_reload_equal(
    #[case] name: &str,
    #[case] group: &str,
) -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set(name, "grouped", Some(group))?;
    store.set_array(Properties::from([(name.to_string(), Entry::from("plain"))]));

    let first = store.serialize();
    let mut reloaded = ConfigurationStore::default();
    reloaded.set_array(literal::parse(&first)?);

    assert_eq!(reloaded, store);
    assert_eq!(reloaded.value(name, Some(group)), Some("grouped"));
    assert_eq!(reloaded.value(name, None), Some("plain"));
    // a second save must not add another escaping level
    assert_eq!(reloaded.serialize(), first);
    Ok(())
}

#[test]
fn test_empty_values_serialize_as_null() -> Result<()> {
    let mut store = ConfigurationStore::default();
    store.set("empty-key", "", Some("general"))?;

    assert!(store.serialize().contains("'empty-key' => null,"));
    Ok(())
}
