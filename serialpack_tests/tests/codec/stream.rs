use super::helpers::{gen, stubs::Player};
use anyhow::Result;
use serialpack_types::{Serializer, Value};
use std::thread;

pub fn test_stream(ser: &Serializer) -> Result<()> {
    concatenation(ser)?;
    truncated_tail(ser)?;
    garbage_tail(ser)?;
    iteration(ser)?;
    Ok(())
}

fn concatenation(ser: &Serializer) -> Result<()> {
    let a = gen::gen_scalars_a();
    let b = gen::gen_scalars_b();

    let mut buf = ser.pack(&a)?;
    buf.extend(ser.pack(&b)?);

    let decoded = ser.unpack(&buf)?;
    assert_eq!(10, decoded.len());
    assert_eq!(a, decoded[..5]);
    assert_eq!(b, decoded[5..]);

    /* An empty message in between contributes nothing. */
    let mut buf = ser.pack(&a)?;
    buf.extend(ser.pack::<Value>(&[])?);
    buf.extend(ser.pack(&b)?);
    assert_eq!(10, ser.unpack(&buf)?.len());

    Ok(())
}

fn truncated_tail(ser: &Serializer) -> Result<()> {
    let a = gen::gen_scalars_a();
    let b = gen::gen_scalars_b();

    let mut buf = ser.pack(&a)?;
    let second = ser.pack(&b)?;
    buf.extend_from_slice(&second[..second.len() - 1]);

    assert_eq!(a, ser.unpack(&buf)?);

    /* The cut message now reads into the next one; only the first message is certain. */
    buf.extend(ser.pack(&a)?);
    let decoded = ser.unpack(&buf)?;
    assert!(decoded.len() >= a.len());
    assert_eq!(a, decoded[..a.len()]);

    Ok(())
}

fn garbage_tail(ser: &Serializer) -> Result<()> {
    let a = vec![Value::object(Player {
        name: String::from("bob"),
        score: 3,
    })];
    let mut buf = ser.pack(&a)?;
    buf.extend(ser.pack(&a)?);

    let tails: [&[u8]; 4] = [&[0xff], &[1, 0, 0, 0, b'x'], &[1, 0, 0, 0, b'z'], &[7, 0]];
    for tail in tails {
        let mut buf = buf.clone();
        buf.extend_from_slice(tail);
        assert_eq!([a.clone(), a.clone()].concat(), ser.unpack(&buf)?);
    }

    Ok(())
}

fn iteration(ser: &Serializer) -> Result<()> {
    let msgs = vec![
        gen::gen_scalars_a(),
        vec![gen::gen_nested(2)],
        vec![],
        gen::gen_scalars_b(),
    ];
    let mut buf = vec![];
    let mut lens = vec![];
    for msg in msgs.iter() {
        let packed = ser.pack(msg)?;
        lens.push(packed.len());
        buf.extend(packed);
    }
    buf.push(0xff);

    let mut iter = ser.messages(&buf);
    for (msg, len) in msgs.iter().zip(lens.iter()) {
        let (decoded, r_len) = iter.next().transpose()?.unwrap_or_default();
        assert_eq!(msg, &decoded);
        assert_eq!(*len, r_len);
    }
    assert_eq!(&[0xff], iter.remaining());
    assert!(matches!(iter.next(), Some(Err(e)) if e.is_truncated()));
    assert!(iter.next().is_none());

    Ok(())
}

pub fn test_concurrent_readers(ser: &Serializer) -> Result<()> {
    let mut buf = ser.pack(&gen::gen_scalars_a())?;
    buf.extend(ser.pack(&[Value::object(Player {
        name: String::from("carol"),
        score: 5,
    })])?);
    let exp = ser.unpack(&buf)?;

    thread::scope(|s| {
        let handles = (0..8)
            .map(|_| {
                let ser = ser.clone();
                let buf = &buf;
                s.spawn(move || ser.unpack(buf))
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let decoded = handle
                .join()
                .map_err(|_| anyhow::anyhow!("reader panicked"))??;
            assert_eq!(exp, decoded);
        }
        Ok(())
    })
}
