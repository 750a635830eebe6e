use super::helpers::stubs::{Player, Ticket};
use anyhow::Result;
use serialpack_types::{DecodeError, Serializer, TypeRegistry, Value};

pub fn test_objects(ser: &Serializer) -> Result<()> {
    round_trip(ser)?;
    stub_equality(ser)?;
    unregistered(ser)?;
    Ok(())
}

fn round_trip(ser: &Serializer) -> Result<()> {
    let alice = Player {
        name: String::from("alice"),
        score: 1200,
    };
    let vals = vec![
        Value::object(alice),
        Value::from("between"),
        Value::List(vec![
            Value::object(Player {
                name: String::new(),
                score: -1,
            }),
            Value::object(Ticket { id: 9, cache: None }),
        ]),
    ];
    let buf = ser.pack(&vals)?;
    let (decoded, r_len) = ser.unpack_message(&buf)?;
    assert_eq!(buf.len(), r_len);
    assert_eq!(vals, decoded);

    let player = decoded[0]
        .as_object()
        .and_then(|obj| obj.downcast_ref::<Player>());
    assert_eq!(Some("alice"), player.map(|p| p.name.as_str()));
    assert_eq!(
        "game.roster.Player",
        decoded[0].as_object().map(|obj| obj.type_ident().to_string()).unwrap_or_default()
    );

    Ok(())
}

fn stub_equality(ser: &Serializer) -> Result<()> {
    let ticket = Ticket {
        id: 77,
        cache: Some(String::from("not packed")),
    };
    let buf = ser.pack(&[Value::object(ticket)])?;
    let decoded = ser.unpack(&buf)?;

    /* Equal by the stub's own rules, though the cache was dropped. */
    assert_eq!(
        vec![Value::object(Ticket {
            id: 77,
            cache: Some(String::from("something else")),
        })],
        decoded
    );
    assert_eq!(
        Some(&None),
        decoded[0]
            .as_object()
            .and_then(|obj| obj.downcast_ref::<Ticket>())
            .map(|t| &t.cache)
    );

    /* Different types never compare equal. */
    assert_ne!(
        Value::object(Ticket { id: 0, cache: None }),
        Value::object(Player {
            name: String::new(),
            score: 0,
        })
    );

    Ok(())
}

fn unregistered(ser: &Serializer) -> Result<()> {
    let buf = ser.pack(&[Value::object(Ticket { id: 1, cache: None })])?;

    let only_players = Serializer::new(TypeRegistry::new().with::<Player>());
    match only_players.unpack(&buf) {
        Err(DecodeError::TypeResolutionError {
            namespace,
            type_name,
        }) => {
            assert_eq!("game.box_office", namespace);
            assert_eq!("Ticket", type_name);
        }
        other => panic!("{other:?}"),
    }

    assert_eq!(2, ser.registry().len());
    Ok(())
}
