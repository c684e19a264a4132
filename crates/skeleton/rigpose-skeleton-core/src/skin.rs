//! Skins: named attachment registries keyed by slot index and attachment key.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::attachment::Attachment;

#[derive(Clone, Debug)]
pub struct Skin {
    pub name: String,
    /// slot index -> attachment key -> attachment
    attachments: HashMap<usize, HashMap<String, Arc<Attachment>>>,
}

impl Skin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attachments: HashMap::new(),
        }
    }

    /// Register `attachment` under `key` for the slot at `slot_index`,
    /// replacing any previous entry.
    pub fn add_attachment(&mut self, slot_index: usize, key: impl Into<String>, attachment: Attachment) {
        self.attachments
            .entry(slot_index)
            .or_default()
            .insert(key.into(), Arc::new(attachment));
    }

    pub fn attachment(&self, slot_index: usize, key: &str) -> Option<&Arc<Attachment>> {
        self.attachments.get(&slot_index)?.get(key)
    }

    pub fn len(&self) -> usize {
        self.attachments.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.values().all(HashMap::is_empty)
    }

    /// Iterate `(slot_index, key, attachment)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &Arc<Attachment>)> {
        self.attachments.iter().flat_map(|(slot, entries)| {
            entries
                .iter()
                .map(move |(key, att)| (*slot, key.as_str(), att))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::AttachmentKind;

    #[test]
    fn lookup_is_per_slot() {
        let mut skin = Skin::new("default");
        skin.add_attachment(0, "head", Attachment::new(AttachmentKind::Region, "head"));
        assert!(skin.attachment(0, "head").is_some());
        assert!(skin.attachment(1, "head").is_none());
        assert_eq!(skin.len(), 1);
    }
}
