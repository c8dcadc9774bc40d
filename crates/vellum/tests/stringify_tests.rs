//! Tests for the core encoding behavior, driven through the `vellum` facade

use vellum::prelude::*;

fn check_output(value: impl Into<Value>, expected: &str) {
    assert_eq!(
        stringify(&value.into()).unwrap().as_deref(),
        Some(expected)
    );
}

mod basics {
    use super::*;

    #[test]
    fn map_members_keep_insertion_order() {
        let user = ValueMap::new();
        user.insert("name", "Alice");
        user.insert("age", 30);
        user.insert("isAdmin", true);

        check_output(user, r#"{"name":"Alice","age":30,"isAdmin":true}"#);
    }

    #[test]
    fn nested_maps() {
        let contact = ValueMap::new();
        contact.insert("email", "bob@example.com");
        contact.insert("phone", "1234567890");

        let user = ValueMap::new();
        user.insert("name", "Bob");
        user.insert("contact", contact);

        check_output(
            user,
            r#"{"name":"Bob","contact":{"email":"bob@example.com","phone":"1234567890"}}"#,
        );
    }

    #[test]
    fn primitives_at_the_root() {
        check_output(1, "1");
        check_output("test", "\"test\"");
        check_output(true, "true");
        check_output(ValueList::from_slice(&[1.into(), 2.into(), 3.into()]), "[1,2,3]");
    }

    #[test]
    fn mixed_type_list() {
        let x = ValueMap::new();
        x.insert("x", 10);
        let list = ValueList::from_slice(&[1.into(), "hello".into(), x.into()]);

        check_output(list, r#"[1,"hello",{"x":10}]"#);
    }

    #[test]
    fn opaque_members_are_skipped() {
        let user = ValueMap::new();
        user.insert("name", "Charlie");
        user.insert("sayHi", OpaqueKind::Function);
        user.insert("age", OpaqueKind::Undefined);
        user.insert("id", OpaqueKind::Symbol);

        check_output(user, r#"{"name":"Charlie"}"#);
    }

    #[test]
    fn input_is_not_mutated() {
        let list = ValueList::from_slice(&[1.into(), OpaqueKind::Undefined.into()]);
        let value = Value::from(list.clone());

        stringify(&value).unwrap();

        assert_eq!(list.len(), 2);
        assert!(matches!(list.data()[1], Value::Opaque(OpaqueKind::Undefined)));
    }
}

mod cycles {
    use super::*;

    #[test]
    fn map_cycle_fails() {
        let room = ValueMap::new();
        room.insert("number", 23);

        let meetup = ValueMap::new();
        meetup.insert("title", "Conference");
        meetup.insert("participants", ValueList::from_slice(&["john".into(), "ann".into()]));
        meetup.insert("place", room.clone());
        room.insert("occupiedBy", meetup.clone());

        assert_eq!(stringify(&meetup.into()), Err(Error::CircularReference));
    }

    #[test]
    fn self_referencing_list_fails() {
        let list = ValueList::default();
        list.push(Value::List(list.clone()));

        assert_eq!(stringify(&list.into()), Err(Error::CircularReference));
    }

    #[test]
    fn shared_map_is_duplicated_not_rejected() {
        let address = ValueMap::new();
        address.insert("city", "Oslo");

        // The same map is reachable through two sibling keys, which is a DAG rather than a cycle
        let user = ValueMap::new();
        user.insert("home", address.clone());
        user.insert("work", address);

        check_output(
            user,
            r#"{"home":{"city":"Oslo"},"work":{"city":"Oslo"}}"#,
        );
    }

    #[test]
    fn deeply_shared_list_is_legal() {
        let shared = ValueList::from_slice(&[true.into()]);
        let inner = ValueList::from_slice(&[shared.clone().into()]);
        let outer = ValueList::from_slice(&[inner.into(), shared.into()]);

        check_output(outer, "[[[true]],[true]]");
    }
}

mod custom_representations {
    use super::*;

    struct Temperature {
        celsius: f64,
    }

    impl Represent for Temperature {
        fn to_value(&self) -> Value {
            let map = ValueMap::new();
            map.insert("celsius", self.celsius);
            map.into()
        }

        fn type_name(&self) -> &str {
            "temperature"
        }
    }

    // A representation that resolves to another custom value
    struct Reading(f64);

    impl Represent for Reading {
        fn to_value(&self) -> Value {
            CustomValue::new(Temperature { celsius: self.0 }).into()
        }
    }

    #[test]
    fn custom_value_in_a_map() {
        let report = ValueMap::new();
        report.insert("location", "office");
        report.insert("temperature", CustomValue::new(Temperature { celsius: 21.5 }));

        check_output(
            report,
            r#"{"location":"office","temperature":{"celsius":21.5}}"#,
        );
    }

    #[test]
    fn custom_value_at_the_root() {
        let value = Value::from(CustomValue::new(Temperature { celsius: -4.0 }));
        check_output(value, r#"{"celsius":-4.0}"#);
    }

    #[test]
    fn representation_chains_are_followed() {
        let value = Value::from(CustomValue::new(Reading(21.5)));
        check_output(value, r#"{"celsius":21.5}"#);
    }

    struct Hidden;

    impl Represent for Hidden {
        fn to_value(&self) -> Value {
            OpaqueKind::Undefined.into()
        }
    }

    #[test]
    fn opaque_representation_is_skipped_like_an_opaque_value() {
        let map = ValueMap::new();
        map.insert("shown", 1);
        map.insert("hidden", CustomValue::new(Hidden));

        check_output(map, r#"{"shown":1}"#);
    }
}

mod indentation {
    use super::*;

    fn pretty(value: impl Into<Value>, indent_width: u8) -> String {
        let options = StringifyOptions {
            indent_width,
            ..Default::default()
        };
        stringify_with_options(&value.into(), &options)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn two_space_indents() {
        let meetup = ValueMap::new();
        meetup.insert("title", "Conference");
        meetup.insert("attendees", ValueList::from_slice(&["john".into(), "ann".into()]));

        let expected = "\
{
  \"title\": \"Conference\",
  \"attendees\": [
    \"john\",
    \"ann\"
  ]
}";
        assert_eq!(pretty(meetup, 2), expected);
    }

    #[test]
    fn empty_containers_stay_compact() {
        let map = ValueMap::new();
        map.insert("members", ValueList::default());

        assert_eq!(pretty(map, 4), "{\n    \"members\": []\n}");
    }

    #[test]
    fn zero_width_matches_compact_output() {
        let map = ValueMap::new();
        map.insert("a", 1);
        map.insert("b", ValueList::from_slice(&[2.into()]));

        assert_eq!(pretty(map.clone(), 0), stringify(&map.into()).unwrap().unwrap());
    }
}
