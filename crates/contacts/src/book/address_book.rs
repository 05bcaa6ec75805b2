use std::sync::mpsc;

use crate::error::{ContactsError, Result};
use crate::model::Contact;
use crate::query::ContactPredicate;

use super::partition::{is_partitioned, partition_favorites};

pub const MESSAGE_DUPLICATE_CONTACT: &str = "This contact already exists in the address book";

/// Change notification published after a mutation has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    /// A contact was added and now sits at `index`.
    Inserted { index: usize },
    /// A contact was edited and now sits at `index`.
    Replaced { index: usize },
    Removed { count: usize },
    /// Contacts were imported in bulk and placed by the partition rule.
    Reordered,
    FilterChanged,
}

/// The contact collection, kept in favorite-first order.
///
/// Every insert and favorite toggle re-runs the partition; deletes and filter
/// changes leave the order alone.
#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    filter: Option<ContactPredicate>,
    subscribers: Vec<mpsc::Sender<BookEvent>>,
}

impl AddressBook {
    /// Builds a book from loaded contacts, partitioning them once.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: partition_favorites(contacts, None),
            filter: None,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<BookEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    fn publish(&mut self, event: BookEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns true if a contact with the same name exists.
    pub fn has_contact(&self, contact: &Contact) -> bool {
        self.contacts
            .iter()
            .any(|existing| existing.is_same_contact(contact))
    }

    pub fn filter(&self) -> Option<&ContactPredicate> {
        self.filter.as_ref()
    }

    /// The contacts currently shown: all of them, or those passing the filter.
    pub fn displayed(&self) -> Vec<&Contact> {
        match &self.filter {
            Some(predicate) => self
                .contacts
                .iter()
                .filter(|contact| predicate.matches(contact))
                .collect(),
            None => self.contacts.iter().collect(),
        }
    }

    /// Looks up a displayed contact by zero-based position.
    pub fn displayed_at(&self, index: usize) -> Option<&Contact> {
        self.displayed().into_iter().nth(index)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Adds a contact and moves it to its partition slot.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.has_contact(&contact) {
            return Err(ContactsError::Logic(MESSAGE_DUPLICATE_CONTACT.to_string()));
        }

        let favorite = contact.is_favorite();
        self.insert_partitioned(contact);

        let index = if favorite { 0 } else { self.contacts.len() - 1 };
        self.publish(BookEvent::Inserted { index });
        Ok(())
    }

    fn insert_partitioned(&mut self, contact: Contact) {
        self.contacts.push(contact);
        let focus = self.contacts.len() - 1;
        self.contacts = partition_favorites(std::mem::take(&mut self.contacts), Some(focus));
        debug_assert!(is_partitioned(&self.contacts));
    }

    /// Adds many contacts, skipping names already present (in the book or
    /// earlier in `contacts`). Returns `(added, duplicates)`; each insert
    /// follows the same placement rule as [`Self::add`].
    pub fn add_all<I>(&mut self, contacts: I) -> (usize, usize)
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut added = 0;
        let mut duplicates = 0;
        for contact in contacts {
            if self.has_contact(&contact) {
                duplicates += 1;
                continue;
            }
            self.insert_partitioned(contact);
            added += 1;
        }
        if added > 0 {
            self.publish(BookEvent::Reordered);
        }
        (added, duplicates)
    }

    /// Replaces `target` with `edited`.
    ///
    /// The edited contact keeps its slot unless its favorite flag toggled, in
    /// which case it moves to the front of the favorites or the back of the
    /// non-favorites.
    pub fn replace(&mut self, target: &Contact, edited: Contact) -> Result<()> {
        let position = self
            .contacts
            .iter()
            .position(|contact| contact == target)
            .ok_or_else(|| ContactsError::Logic("The contact to edit no longer exists".to_string()))?;

        if !target.is_same_contact(&edited) && self.has_contact(&edited) {
            return Err(ContactsError::Logic(MESSAGE_DUPLICATE_CONTACT.to_string()));
        }

        let toggled = target.is_favorite() != edited.is_favorite();
        let favorite = edited.is_favorite();
        self.contacts[position] = edited;

        let index = if toggled {
            self.contacts =
                partition_favorites(std::mem::take(&mut self.contacts), Some(position));
            debug_assert!(is_partitioned(&self.contacts));
            if favorite {
                0
            } else {
                self.contacts.len() - 1
            }
        } else {
            position
        };
        self.publish(BookEvent::Replaced { index });
        Ok(())
    }

    /// Removes `target`. The remaining order is unchanged.
    pub fn remove(&mut self, target: &Contact) -> Result<Contact> {
        let position = self
            .contacts
            .iter()
            .position(|contact| contact == target)
            .ok_or_else(|| {
                ContactsError::Logic("The contact to delete no longer exists".to_string())
            })?;
        let removed = self.contacts.remove(position);
        self.publish(BookEvent::Removed { count: 1 });
        Ok(removed)
    }

    /// Removes every contact in the whole book that `predicate` accepts,
    /// regardless of the current filter. Returns the removed contacts in
    /// their former order.
    pub fn remove_matching(&mut self, predicate: &ContactPredicate) -> Vec<Contact> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.contacts)
            .into_iter()
            .partition(|contact| predicate.matches(contact));
        self.contacts = kept;
        if !removed.is_empty() {
            self.publish(BookEvent::Removed {
                count: removed.len(),
            });
        }
        removed
    }

    pub fn set_filter(&mut self, predicate: ContactPredicate) {
        self.filter = Some(predicate);
        self.publish(BookEvent::FilterChanged);
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.publish(BookEvent::FilterChanged);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{contact, names};
    use crate::model::{ContactChanges, Favorite};
    use crate::query::{CriteriaParser, MarkerPolicy};

    fn predicate(input: &str) -> ContactPredicate {
        let criteria = CriteriaParser::new(MarkerPolicy::Required)
            .parse(input)
            .expect("criteria");
        ContactPredicate::from_criteria(&criteria)
    }

    fn sample_book() -> AddressBook {
        AddressBook::new(vec![
            contact("Alice Pauline", &["friends"], &["CS2103T"], &["Computing"], false),
            contact("Benson Meier", &["owesMoney", "friends"], &[], &["Science"], true),
            contact("Carl Kurz", &[], &["MA1521"], &["Computing"], false),
        ])
    }

    #[test]
    fn load_partitions_without_focus() {
        let book = sample_book();
        assert_eq!(
            names(book.contacts()),
            vec!["Benson Meier", "Alice Pauline", "Carl Kurz"]
        );
    }

    #[test]
    fn add_places_favorite_first_and_rejects_duplicates() {
        let mut book = AddressBook::new(vec![
            contact("A", &[], &[], &[], false),
            contact("B", &[], &[], &[], false),
        ]);
        let events = book.subscribe();

        book.add(contact("C", &[], &[], &[], true)).expect("add C");
        assert_eq!(names(book.contacts()), vec!["C", "A", "B"]);
        assert_eq!(events.try_recv().expect("event"), BookEvent::Inserted { index: 0 });

        book.add(contact("D", &[], &[], &[], false)).expect("add D");
        assert_eq!(names(book.contacts()), vec!["C", "A", "B", "D"]);
        assert_eq!(events.try_recv().expect("event"), BookEvent::Inserted { index: 3 });

        match book.add(contact("A", &["other"], &[], &[], true)) {
            Err(ContactsError::Logic(message)) => assert_eq!(message, MESSAGE_DUPLICATE_CONTACT),
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert_eq!(book.len(), 4);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn edit_toggling_favorite_repartitions() {
        let mut book = AddressBook::default();
        for (name, favorite) in [("B", true), ("A", false), ("C", false)] {
            book.add(contact(name, &[], &[], &[], favorite)).expect("add");
        }
        assert_eq!(names(book.contacts()), vec!["B", "A", "C"]);

        let target = book.contacts()[1].clone();
        let changes = ContactChanges {
            favorite: Some(Favorite::new(true)),
            ..ContactChanges::default()
        };
        book.replace(&target, changes.apply(&target)).expect("favorite A");
        assert_eq!(names(book.contacts()), vec!["A", "B", "C"]);

        let target = book.contacts()[0].clone();
        let changes = ContactChanges {
            favorite: Some(Favorite::new(false)),
            ..ContactChanges::default()
        };
        book.replace(&target, changes.apply(&target)).expect("unfavorite A");
        assert_eq!(names(book.contacts()), vec!["B", "C", "A"]);
    }

    #[test]
    fn edit_without_toggle_keeps_slot() {
        let mut book = sample_book();
        let events = book.subscribe();
        let target = book.contacts()[1].clone();
        let edited = ContactChanges {
            tags: Some(Default::default()),
            ..ContactChanges::default()
        }
        .apply(&target);

        book.replace(&target, edited).expect("edit");
        assert_eq!(
            names(book.contacts()),
            vec!["Benson Meier", "Alice Pauline", "Carl Kurz"]
        );
        assert!(book.contacts()[1].tags().is_empty());
        assert_eq!(events.try_recv().expect("event"), BookEvent::Replaced { index: 1 });
    }

    #[test]
    fn edit_into_existing_name_is_rejected() {
        let mut book = sample_book();
        let target = book.contacts()[1].clone();
        let renamed = contact("Carl Kurz", &[], &[], &[], false);
        assert!(matches!(
            book.replace(&target, renamed),
            Err(ContactsError::Logic(_))
        ));
        assert_eq!(book.contacts()[1], target);
    }

    #[test]
    fn remove_matching_ignores_filter_and_keeps_order() {
        let mut book = sample_book();
        book.set_filter(predicate("n/Benson"));
        assert_eq!(book.displayed().len(), 1);

        let removed = book.remove_matching(&predicate("f/Computing"));
        assert_eq!(names(&removed), vec!["Alice Pauline", "Carl Kurz"]);
        assert_eq!(names(book.contacts()), vec!["Benson Meier"]);
    }

    #[test]
    fn displayed_follows_filter() {
        let mut book = sample_book();
        let events = book.subscribe();
        book.set_filter(predicate("f/Computing"));

        let shown = book
            .displayed()
            .into_iter()
            .map(|contact| contact.name().as_str())
            .collect::<Vec<_>>();
        assert_eq!(shown, vec!["Alice Pauline", "Carl Kurz"]);
        assert_eq!(
            book.displayed_at(1).map(|contact| contact.name().as_str()),
            Some("Carl Kurz")
        );
        assert!(book.displayed_at(2).is_none());

        book.clear_filter();
        assert_eq!(book.displayed().len(), 3);
        assert_eq!(events.try_iter().count(), 2);
    }

    #[test]
    fn add_all_counts_duplicates() {
        let mut book = sample_book();
        let (added, duplicates) = book.add_all(vec![
            contact("Daniel Meier", &[], &[], &[], true),
            contact("Alice Pauline", &[], &[], &[], false),
            contact("Elle Meyer", &[], &[], &[], false),
            contact("Elle Meyer", &[], &[], &[], true),
        ]);
        assert_eq!((added, duplicates), (2, 2));
        assert_eq!(
            names(book.contacts()),
            vec![
                "Daniel Meier",
                "Benson Meier",
                "Alice Pauline",
                "Carl Kurz",
                "Elle Meyer"
            ]
        );
    }

    #[test]
    fn import_publishes_one_reorder_and_keeps_partition() {
        let mut book = sample_book();
        let events = book.subscribe();
        book.add_all(vec![
            contact("Fiona Kunz", &[], &[], &[], true),
            contact("George Best", &[], &[], &[], false),
        ]);
        assert!(is_partitioned(book.contacts()));
        assert_eq!(events.try_iter().collect::<Vec<_>>(), vec![BookEvent::Reordered]);

        book.add_all(vec![contact("Alice Pauline", &[], &[], &[], true)]);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut book = sample_book();
        drop(book.subscribe());
        let live = book.subscribe();
        book.clear_filter();
        book.set_filter(predicate("n/Carl"));
        assert_eq!(live.try_recv().expect("event"), BookEvent::FilterChanged);
        assert_eq!(book.subscribers.len(), 1);
    }
}
