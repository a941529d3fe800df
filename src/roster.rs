//! Participant roster
//!
//! Ordered list of participants, persisted to LocalStorage so the list
//! survives a reload. The stored document is the plain JSON array of
//! participants.

use thiserror::Error;

use crate::exchange::Participant;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("participant name must not be empty")]
    EmptyName,
}

/// The participant list
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Participant>,
    /// Next id to hand out; ids are never reused within a stored list
    next_id: u64,
}

impl Roster {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "participants";

    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Participants in insertion order
    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a participant. The name is trimmed and must be non-empty; the
    /// phone number is trimmed and kept only if something remains. Returns
    /// the id of the new entry and persists the updated list.
    pub fn add(&mut self, name: &str, phone_number: &str) -> Result<u64, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let phone_number = phone_number.trim();
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Participant {
            id,
            name: name.to_owned(),
            phone_number: (!phone_number.is_empty()).then(|| phone_number.to_owned()),
        });
        self.save();
        Ok(id)
    }

    /// Remove the participant with the given id, keeping the relative order
    /// of the rest. Unknown ids are ignored. Persists the updated list.
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|p| p.id != id);
        self.save();
    }

    /// Serialize the list for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Rebuild a roster from a stored document. Anything unparseable is
    /// treated the same as no saved data: an empty roster. The id counter
    /// resumes above the highest stored id.
    pub fn from_json(json: &str) -> Self {
        let entries: Vec<Participant> = match serde_json::from_str(json) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Discarding unreadable participant list: {err}");
                Vec::new()
            }
        };
        let next_id = entries.iter().map(|p| p.id + 1).max().unwrap_or(0);
        Self { entries, next_id }
    }

    /// Load the roster from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let roster = Self::from_json(&json);
                log::info!("Loaded {} participants", roster.len());
                return roster;
            }
        }

        log::info!("No saved participants, starting fresh");
        Self::new()
    }

    /// Save the roster to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Participants saved ({} entries)", self.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order_with_fresh_ids() {
        let mut roster = Roster::new();
        let a = roster.add("Alice", "").unwrap();
        let b = roster.add("Bob", "5551112233").unwrap();
        let c = roster.add("Alice", "").unwrap(); // duplicate names are fine

        assert_ne!(a, b);
        assert_ne!(b, c);
        let names: Vec<&str> = roster.entries().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(
            roster.entries()[1].phone_number.as_deref(),
            Some("5551112233")
        );
    }

    #[test]
    fn add_trims_and_rejects_empty_names() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("", ""), Err(RosterError::EmptyName));
        assert_eq!(roster.add("   \t", ""), Err(RosterError::EmptyName));
        assert!(roster.is_empty());

        roster.add("  Carol  ", "  ").unwrap();
        assert_eq!(roster.entries()[0].name, "Carol");
        assert_eq!(roster.entries()[0].phone_number, None);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut roster = Roster::new();
        let _a = roster.add("Alice", "").unwrap();
        let b = roster.add("Bob", "").unwrap();
        let _c = roster.add("Carol", "").unwrap();

        roster.remove(b);
        let names: Vec<&str> = roster.entries().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);

        // Removing an unknown id is a no-op
        roster.remove(9999);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut roster = Roster::new();
        let a = roster.add("Alice", "").unwrap();
        roster.remove(a);
        let b = roster.add("Bob", "").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn json_round_trip_preserves_everything() {
        let mut roster = Roster::new();
        roster.add("Alice", "555 123 4567").unwrap();
        roster.add("Bob", "").unwrap();
        roster.add("Carol", "+90 555 987 65 43").unwrap();

        let json = roster.to_json().unwrap();
        let restored = Roster::from_json(&json);
        assert_eq!(restored.entries(), roster.entries());
    }

    #[test]
    fn restored_roster_keeps_ids_fresh() {
        let mut roster = Roster::new();
        roster.add("Alice", "").unwrap();
        let b = roster.add("Bob", "").unwrap();

        let mut restored = Roster::from_json(&roster.to_json().unwrap());
        let c = restored.add("Carol", "").unwrap();
        assert!(c > b);
    }

    #[test]
    fn malformed_documents_yield_an_empty_roster() {
        for junk in ["", "not json", "{\"weird\":true}", "[{\"id\":\"nope\"}]"] {
            let roster = Roster::from_json(junk);
            assert!(roster.is_empty(), "expected empty roster for {junk:?}");
        }
    }
}
