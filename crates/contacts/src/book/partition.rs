//! Favorite-first ordering of the contact list.

use crate::model::Contact;

/// Reorders `contacts` so every favorite precedes every non-favorite, keeping
/// the prior relative order inside each group.
///
/// `focus` names the one contact that was just inserted or whose favorite
/// flag just toggled. A focused favorite moves to the front of the favorites;
/// a focused non-favorite moves to the back of the non-favorites. An index
/// past the end is ignored.
pub fn partition_favorites(contacts: Vec<Contact>, focus: Option<usize>) -> Vec<Contact> {
    let mut favorites = Vec::with_capacity(contacts.len());
    let mut others = Vec::new();
    let mut focused = None;

    for (index, contact) in contacts.into_iter().enumerate() {
        if focus == Some(index) {
            focused = Some(contact);
        } else if contact.is_favorite() {
            favorites.push(contact);
        } else {
            others.push(contact);
        }
    }

    match focused {
        Some(contact) if contact.is_favorite() => favorites.insert(0, contact),
        Some(contact) => others.push(contact),
        None => {}
    }

    favorites.append(&mut others);
    favorites
}

/// Returns true if no favorite appears after a non-favorite.
pub(crate) fn is_partitioned(contacts: &[Contact]) -> bool {
    contacts
        .windows(2)
        .all(|pair| pair[0].is_favorite() || !pair[1].is_favorite())
}
