//! Tests for key-list and transform replacers

use vellum::prelude::*;

// The meetup/room fixture: the graph contains a cycle through `place.occupiedBy`
fn meetup_fixture() -> Value {
    let room = ValueMap::new();
    room.insert("number", 23);

    let john = ValueMap::new();
    john.insert("name", "John");
    let alice = ValueMap::new();
    alice.insert("name", "Alice");

    let meetup = ValueMap::new();
    meetup.insert("title", "Conference");
    meetup.insert("participants", ValueList::from_slice(&[john.into(), alice.into()]));
    meetup.insert("place", room.clone());
    room.insert("occupiedBy", meetup.clone());

    meetup.into()
}

fn stringify_with_replacer(value: &Value, replacer: Replacer) -> Option<String> {
    let options = StringifyOptions {
        replacer: Some(replacer),
        ..Default::default()
    };
    stringify_with_options(value, &options).unwrap()
}

mod key_lists {
    use super::*;

    #[test]
    fn keys_apply_at_every_nesting_level() {
        // `name` isn't listed, so the participant maps lose all of their members
        let output = stringify_with_replacer(
            &meetup_fixture(),
            Replacer::keys(["title", "participants"]),
        );

        assert_eq!(
            output.as_deref(),
            Some(r#"{"title":"Conference","participants":[{},{}]}"#)
        );
    }

    #[test]
    fn listing_everything_except_the_cyclic_key() {
        let output = stringify_with_replacer(
            &meetup_fixture(),
            Replacer::keys(["title", "participants", "place", "name", "number"]),
        );

        assert_eq!(
            output.as_deref(),
            Some(
                r#"{"title":"Conference","participants":[{"name":"John"},{"name":"Alice"}],"place":{"number":23}}"#
            )
        );
    }

    #[test]
    fn entries_are_emitted_in_selector_order() {
        let map = ValueMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        let output = stringify_with_replacer(&map.into(), Replacer::keys(["c", "a"]));
        assert_eq!(output.as_deref(), Some(r#"{"c":3,"a":1}"#));
    }

    #[test]
    fn duplicate_and_missing_names_are_ignored() {
        let map = ValueMap::new();
        map.insert("a", 1);

        let output =
            stringify_with_replacer(&map.into(), Replacer::keys(["a", "missing", "a"]));
        assert_eq!(output.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn lists_are_unaffected_by_key_lists() {
        let list = ValueList::from_slice(&[1.into(), 2.into()]);

        let output = stringify_with_replacer(&list.into(), Replacer::keys(["title"]));
        assert_eq!(output.as_deref(), Some("[1,2]"));
    }
}

mod transforms {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn omitting_the_cyclic_key_breaks_the_cycle() {
        let output = stringify_with_replacer(
            &meetup_fixture(),
            Replacer::transform(|key, value, _owner| {
                (key != "occupiedBy").then(|| value.clone())
            }),
        );

        assert_eq!(
            output.as_deref(),
            Some(
                r#"{"title":"Conference","participants":[{"name":"John"},{"name":"Alice"}],"place":{"number":23}}"#
            )
        );
    }

    #[test]
    fn omitted_list_slots_become_null() {
        let list = ValueList::from_slice(&[1.into(), 2.into(), 3.into()]);

        let output = stringify_with_replacer(
            &list.into(),
            Replacer::transform(|_key, value, _owner| match value {
                Value::Number(n) if *n > 2.into() => None,
                _ => Some(value.clone()),
            }),
        );

        // Slots never shift position
        assert_eq!(output.as_deref(), Some("[1,2,null]"));
    }

    #[test]
    fn values_can_be_replaced() {
        let user = ValueMap::new();
        user.insert("name", "Pranav");
        user.insert("age", 34);

        let output = stringify_with_replacer(
            &user.into(),
            Replacer::transform(|_key, value, _owner| match value {
                Value::Number(n) => Some(format!("#{n}").into()),
                other => Some(other.clone()),
            }),
        );

        assert_eq!(output.as_deref(), Some(r##"{"name":"Pranav","age":"#34"}"##));
    }

    #[test]
    fn omitting_the_root_produces_no_output() {
        let output = stringify_with_replacer(
            &Value::from(1),
            Replacer::transform(|_key, _value, _owner| None),
        );

        assert_eq!(output, None);
    }

    #[test]
    fn every_entry_is_visited_starting_with_a_root_wrapper() {
        let participants = ValueList::from_slice(&["john".into()]);
        let meetup = ValueMap::new();
        meetup.insert("title", "Conference");
        meetup.insert("participants", participants);

        let visited = Arc::new(Mutex::new(Vec::new()));
        let recorded = visited.clone();
        let root = Value::from(meetup);

        let _ = stringify_with_replacer(
            &root,
            Replacer::transform(move |key, value, owner| {
                recorded
                    .lock()
                    .unwrap()
                    .push((key.to_string(), owner.is_none()));
                Some(value.clone())
            }),
        );

        // The first call passes the whole value with an empty key and no owner
        assert_eq!(
            *visited.lock().unwrap(),
            [
                ("".to_string(), true),
                ("title".to_string(), false),
                ("participants".to_string(), false),
                ("0".to_string(), false),
            ]
        );
    }

    #[test]
    fn transformed_values_are_resolved_through_their_representation() {
        struct AsText(&'static str);

        impl Represent for AsText {
            fn to_value(&self) -> Value {
                self.0.into()
            }
        }

        let map = ValueMap::new();
        map.insert("status", 0);

        let output = stringify_with_replacer(
            &map.into(),
            Replacer::transform(|key, value, _owner| {
                if key == "status" {
                    Some(CustomValue::new(AsText("ok")).into())
                } else {
                    Some(value.clone())
                }
            }),
        );

        assert_eq!(output.as_deref(), Some(r#"{"status":"ok"}"#));
    }
}
