use crate::assets::ModelHandle;
use crate::assets::error::{AssetError, AssetNotFoundErr};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::{trace, warn};

/// Identifier → handle lookup of everything that finished loading.
///
/// Entries are only ever added, one per identifier, once that identifier's load
/// completed. There are no placeholder entries: a missing key means "not loaded (yet)"
/// or "failed".
#[derive(Debug, Default)]
pub struct AssetTable {
    data: DashMap<String, ModelHandle>,
}

impl AssetTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Publishes a loaded handle. If the identifier is already present, the existing
    /// entry wins and is returned instead. The flag is true only if this call inserted.
    pub(crate) fn publish(&self, identifier: &str, handle: ModelHandle) -> (ModelHandle, bool) {
        match self.data.entry(identifier.to_string()) {
            Entry::Occupied(entry) => {
                warn!("[Asset Table] {identifier:?} was already published, keeping the first entry");
                (entry.get().clone(), false)
            }
            Entry::Vacant(entry) => {
                trace!("[Asset Table] Added element: {identifier:?}");
                (entry.insert(handle).clone(), true)
            }
        }
    }

    pub fn try_get(&self, identifier: &str) -> Option<ModelHandle> {
        self.data.get(identifier).map(|entry| entry.value().clone())
    }

    pub fn get(&self, identifier: &str) -> Result<ModelHandle, AssetError> {
        self.try_get(identifier)
            .ok_or_else(|| AssetNotFoundErr { identifier }.build())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.data.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.data.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Model;

    #[test]
    fn missing_identifier_is_not_found() {
        let table = AssetTable::empty();
        let err = table.get("hoop").unwrap_err();
        assert!(matches!(err, AssetError::AssetNotFound { ref identifier } if identifier == "hoop"));
        assert!(table.is_empty());
    }

    #[test]
    fn first_publish_wins() {
        let table = AssetTable::empty();
        let first = Model::empty("hoop").into_handle();
        let second = Model::empty("hoop").into_handle();

        let (kept, inserted) = table.publish("hoop", first.clone());
        assert!(inserted);
        assert!(kept.ptr_eq(&first));

        let (kept, inserted) = table.publish("hoop", second);
        assert!(!inserted);
        assert!(kept.ptr_eq(&first));
        assert_eq!(table.len(), 1);
        assert!(table.get("hoop").unwrap().ptr_eq(&first));
    }
}
