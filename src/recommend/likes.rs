//! Like state for the recommendation rail.

/// Ordered ids of liked items, most recently liked first.
///
/// The backing content list is never touched; this type only derives a
/// display order over it. Un-liking removes the id, so the item falls back
/// to its original relative position among the not-liked items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikeOrder {
    liked: Vec<String>,
}

impl LikeOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.iter().any(|l| l == id)
    }

    /// Liked ids, most recent first.
    pub fn liked_ids(&self) -> &[String] {
        &self.liked
    }

    /// Flip the like state of an id. Returns true if the id is liked
    /// afterwards. Newly liked ids go to the front.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.liked.iter().position(|l| l == id) {
            self.liked.remove(pos);
            false
        } else {
            self.liked.insert(0, id.to_string());
            true
        }
    }

    /// Derive the display order: liked items first in like order, the rest
    /// in backing order.
    pub fn display_order<'a, T>(&self, items: &'a [T], id_of: impl Fn(&T) -> String) -> Vec<&'a T> {
        let mut ordered = Vec::with_capacity(items.len());
        for liked in &self.liked {
            if let Some(item) = items.iter().find(|i| id_of(i) == *liked) {
                ordered.push(item);
            }
        }
        ordered.extend(items.iter().filter(|i| !self.is_liked(&id_of(i))));
        ordered
    }
}
