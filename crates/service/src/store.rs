use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::customer::Customer;
use crate::errors::ServiceError;

/// In-memory customer store shared across request handlers.
///
/// A `HashMap<String, Customer>` behind a tokio `RwLock`: reads take the
/// lock shared, every mutation takes it exclusive. The handle is cheap to
/// clone; all clones see the same map. Nothing is persisted, restarting
/// the process resets the data to the seed records.
#[derive(Clone)]
pub struct CustomerStore {
    inner: Arc<RwLock<HashMap<String, Customer>>>,
}

impl CustomerStore {
    /// Empty store, mostly useful in tests.
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Store preloaded with the three demo records the service ships with.
    pub fn seeded() -> Self {
        let map: HashMap<String, Customer> = seed_customers()
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Self { inner: Arc::new(RwLock::new(map)) }
    }

    /// Snapshot of all records. Order is whatever the map yields.
    pub async fn list(&self) -> Vec<Customer> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Look up a single record by id.
    pub async fn get(&self, id: &str) -> Option<Customer> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    /// Store a new record under a fresh id and return it.
    ///
    /// Id policy is `map length + 1` rendered as a string, matching the
    /// observable ids callers rely on ("1".."3" seeds, next insert is "4").
    /// After deletions this can reissue or collide with an existing id;
    /// the demo scope accepts that.
    pub async fn insert(&self, mut candidate: Customer) -> Customer {
        let mut map = self.inner.write().await;
        candidate.id = (map.len() + 1).to_string();
        map.insert(candidate.id.clone(), candidate.clone());
        candidate
    }

    /// Overwrite the record at `id` entirely with `candidate`.
    ///
    /// The stored id always stays the path id; an id inside the payload is
    /// ignored. Missing `id` is `NotFound`.
    pub async fn replace(&self, id: &str, mut candidate: Customer) -> Result<Customer, ServiceError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(id) {
            return Err(ServiceError::not_found("customer"));
        }
        candidate.id = id.to_string();
        map.insert(id.to_string(), candidate.clone());
        Ok(candidate)
    }

    /// Remove the record at `id`; `NotFound` if it was never there.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        match map.remove(id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("customer")),
        }
    }

    /// Overwrite every candidate whose own id already exists in the store.
    ///
    /// Candidates with unknown ids are skipped without any signal; the
    /// whole batch is applied under one write-lock acquisition so other
    /// callers never observe it half done.
    pub async fn batch_replace(&self, candidates: Vec<Customer>) {
        let mut map = self.inner.write().await;
        for candidate in candidates {
            if map.contains_key(&candidate.id) {
                map.insert(candidate.id.clone(), candidate);
            }
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed demo dataset loaded at startup.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".into(),
            name: "Alice".into(),
            role: "Engineer".into(),
            email: "alice@example.com".into(),
            phone: 1234567890,
            contacted: false,
        },
        Customer {
            id: "2".into(),
            name: "Bob".into(),
            role: "Manager".into(),
            email: "bob@example.com".into(),
            phone: 1234567891,
            contacted: true,
        },
        Customer {
            id: "3".into(),
            name: "Charlie".into(),
            role: "Director".into(),
            email: "charlie@example.com".into(),
            phone: 1234567892,
            contacted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> Customer {
        Customer {
            id: String::new(),
            name: name.into(),
            role: "QA".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: 555,
            contacted: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = CustomerStore::new();
        let a = store.insert(candidate("Dana")).await;
        let b = store.insert(candidate("Eli")).await;
        let c = store.insert(candidate("Fay")).await;
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert_eq!(c.id, "3");
    }

    #[tokio::test]
    async fn get_returns_what_insert_stored() {
        let store = CustomerStore::new();
        let stored = store.insert(candidate("Dana")).await;
        let found = store.get(&stored.id).await.expect("present");
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = CustomerStore::new();
        let stored = store.insert(candidate("Dana")).await;
        store.delete(&stored.id).await.expect("delete ok");
        assert!(store.get(&stored.id).await.is_none());
        assert!(matches!(
            store.delete(&stored.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn replace_forces_path_id() {
        let store = CustomerStore::new();
        let stored = store.insert(candidate("Dana")).await;
        let mut update = candidate("Dana Updated");
        update.id = "99".into();
        let replaced = store.replace(&stored.id, update).await.expect("replace ok");
        assert_eq!(replaced.id, stored.id);
        assert_eq!(replaced.name, "Dana Updated");
        assert!(store.get("99").await.is_none());
    }

    #[tokio::test]
    async fn replace_missing_id_is_not_found() {
        let store = CustomerStore::new();
        let res = store.replace("42", candidate("Nobody")).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn batch_replace_skips_unknown_ids() {
        let store = CustomerStore::new();
        let stored = store.insert(candidate("Dana")).await;

        let mut known = candidate("Dana Two");
        known.id = stored.id.clone();
        let mut unknown = candidate("Ghost");
        unknown.id = "404".into();

        store.batch_replace(vec![known, unknown]).await;

        assert_eq!(store.get(&stored.id).await.expect("present").name, "Dana Two");
        assert!(store.get("404").await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn list_tracks_inserts_and_deletes() {
        let store = CustomerStore::new();
        assert!(store.is_empty().await);
        let a = store.insert(candidate("Dana")).await;
        let _b = store.insert(candidate("Eli")).await;
        assert_eq!(store.list().await.len(), 2);
        store.delete(&a.id).await.expect("delete ok");
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn seeded_store_has_demo_records() {
        let store = CustomerStore::seeded();
        assert_eq!(store.len().await, 3);
        let bob = store.get("2").await.expect("bob");
        assert_eq!(bob.name, "Bob");
        assert!(bob.contacted);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_never_see_a_half_applied_replace() {
        let store = CustomerStore::new();
        let stored = store.insert(candidate("Dana")).await;
        let id = stored.id.clone();

        // Writer flips between two internally consistent records; readers
        // must only ever observe one of them, never a mix.
        let writer = {
            let store = store.clone();
            let id = id.clone();
            tokio::spawn(async move {
                for i in 0..500 {
                    let tag = if i % 2 == 0 { "even" } else { "odd" };
                    let rec = Customer {
                        id: String::new(),
                        name: tag.into(),
                        role: tag.into(),
                        email: format!("{}@example.com", tag),
                        phone: if tag == "even" { 2 } else { 1 },
                        contacted: tag == "even",
                    };
                    store.replace(&id, rec).await.expect("replace ok");
                }
            })
        };

        let reader = {
            let store = store.clone();
            let id = id.clone();
            tokio::spawn(async move {
                for _ in 0..500 {
                    if let Some(c) = store.get(&id).await {
                        if c.name == "even" || c.name == "odd" {
                            assert_eq!(c.role, c.name);
                            assert_eq!(c.email, format!("{}@example.com", c.name));
                            assert_eq!(c.contacted, c.name == "even");
                        }
                    }
                    let all = store.list().await;
                    assert_eq!(all.len(), 1);
                }
            })
        };

        writer.await.expect("writer join");
        reader.await.expect("reader join");
    }
}
