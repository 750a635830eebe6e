use anyhow::{anyhow, Result};
use serialpack_types::{Packable, TypeRegistry};

/// A record whose payload is a length-prefixed name followed by a score.
#[derive(PartialEq, Debug)]
pub struct Player {
    pub name: String,
    pub score: i64,
}

impl Packable for Player {
    const NAMESPACE: &'static str = "game.roster";
    const TYPE_NAME: &'static str = "Player";

    fn placeholder() -> Self {
        Player {
            name: String::new(),
            score: 0,
        }
    }

    fn pack(&self) -> Result<Vec<u8>> {
        let name_len = u32::try_from(self.name.len())?;
        let mut buf = name_len.to_le_bytes().to_vec();
        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(&self.score.to_le_bytes());
        Ok(buf)
    }

    fn unpack(mut self, buf: &[u8]) -> Result<(Self, usize)> {
        let name_len = buf
            .get(0..4)
            .ok_or(anyhow!("Player name length missing"))?;
        let name_len = u32::from_le_bytes(name_len.try_into()?) as usize;
        let name = buf
            .get(4..4 + name_len)
            .ok_or(anyhow!("Player name cut short"))?;
        let score = buf
            .get(4 + name_len..12 + name_len)
            .ok_or(anyhow!("Player score missing"))?;

        self.name = String::from_utf8(name.to_vec())?;
        self.score = i64::from_le_bytes(score.try_into()?);
        Ok((self, 12 + name_len))
    }
}

/// Compares by `id` only; `cache` never travels.
#[derive(Debug)]
pub struct Ticket {
    pub id: u32,
    pub cache: Option<String>,
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Ticket) -> bool {
        self.id == other.id
    }
}

impl Packable for Ticket {
    const NAMESPACE: &'static str = "game.box_office";
    const TYPE_NAME: &'static str = "Ticket";

    fn placeholder() -> Self {
        Ticket { id: 0, cache: None }
    }

    fn pack(&self) -> Result<Vec<u8>> {
        Ok(self.id.to_le_bytes().to_vec())
    }

    fn unpack(self, buf: &[u8]) -> Result<(Self, usize)> {
        let id = buf.get(0..4).ok_or(anyhow!("Ticket id missing"))?;
        let id = u32::from_le_bytes(id.try_into()?);
        Ok((Ticket { id, cache: None }, 4))
    }
}

pub fn registry() -> TypeRegistry {
    TypeRegistry::new().with::<Player>().with::<Ticket>()
}
