use std::collections::HashMap;

/// Numeric id of a registered asset path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AssetId(pub u32);

/// Registry of asset paths, assigning stable ids in first-use order.
/// The host loads textures by walking `names()`.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    ids: HashMap<String, AssetId>,
    names: Vec<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, registering it on first sight.
    pub fn register(&mut self, name: &str) -> AssetId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = AssetId(self.names.len() as u32);
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Look up an asset by path. Returns None if never registered.
    pub fn get(&self, name: &str) -> Option<AssetId> {
        self.ids.get(name).copied()
    }

    /// Asset paths indexed by id.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
