use anyhow::{Context, Result};

use crate::models::Dance;

use super::backend::KeyValueStore;

/// The single storage slot holding the serialized working list. There is no
/// versioning field; any value that fails to parse is treated as absent.
pub const DANCES_KEY: &str = "dances";

/// Load the working list from the store, falling back to a copy of the seed
/// list when the key is absent, empty, or fails to parse. Parse and read
/// failures are swallowed on purpose: a corrupt blob degrades to the default
/// program instead of blocking startup, and the next save simply overwrites
/// it.
pub fn load_dances(store: &impl KeyValueStore, seed: &[Dance]) -> Vec<Dance> {
    match store.get(DANCES_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|_| seed.to_vec()),
        Ok(None) | Err(_) => seed.to_vec(),
    }
}

/// Serialize the working list and overwrite the stored copy. Unlike the load
/// path, write failures are reported so an explicit save can surface them.
pub fn store_dances(store: &mut impl KeyValueStore, dances: &[Dance]) -> Result<()> {
    let json = serde_json::to_string_pretty(dances).context("failed to serialize program order")?;
    store
        .put(DANCES_KEY, &json)
        .context("failed to write program order")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryStore;

    fn seed() -> Vec<Dance> {
        vec![Dance {
            name: "Opener".into(),
            song: "Overture".into(),
            artist: "Pit Band".into(),
            dancers: vec!["Avery".into(), "Brooke".into()],
        }]
    }

    #[test]
    fn roundtrip_preserves_list() {
        let mut store = MemoryStore::default();
        let dances = vec![
            Dance {
                name: "A".into(),
                song: "s1".into(),
                artist: "a1".into(),
                dancers: vec!["x".into()],
            },
            Dance {
                name: "B".into(),
                song: "s2".into(),
                artist: "a2".into(),
                dancers: vec![],
            },
        ];

        store_dances(&mut store, &dances).unwrap();
        let loaded = load_dances(&store, &seed());
        assert_eq!(loaded, dances);
    }

    #[test]
    fn absent_key_falls_back_to_seed() {
        let store = MemoryStore::default();
        assert_eq!(load_dances(&store, &seed()), seed());
    }

    #[test]
    fn empty_value_falls_back_to_seed() {
        let mut store = MemoryStore::default();
        store.put(DANCES_KEY, "").unwrap();
        assert_eq!(load_dances(&store, &seed()), seed());
    }

    #[test]
    fn malformed_value_falls_back_to_seed() {
        let mut store = MemoryStore::default();
        store.put(DANCES_KEY, "{not json").unwrap();
        assert_eq!(load_dances(&store, &seed()), seed());

        // Wrong shape parses as JSON but not as a dance list.
        store.put(DANCES_KEY, "{\"name\":\"A\"}").unwrap();
        assert_eq!(load_dances(&store, &seed()), seed());
    }
}
