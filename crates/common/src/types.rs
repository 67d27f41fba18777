use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a running Falcon process, served from `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
    /// Backing store for admin records, e.g. `postgres` or `memory`.
    pub store: String,
    /// True when delay risk draws come from a fixed seed.
    pub seeded_risk: bool,
}

impl ServiceInfo {
    pub fn new(name: &str, store: &str, seeded_risk: bool) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
            store: store.to_owned(),
            seeded_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_carries_store_and_seeding() {
        let info = ServiceInfo::new("falcon-api", "memory", true);
        assert_eq!(info.store, "memory");
        assert!(info.seeded_risk);
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
