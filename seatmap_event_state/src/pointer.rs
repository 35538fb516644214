// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live pointer contacts.
//!
//! [`PointerSession`] maps each pressed pointer to its last known position,
//! in press order. The derived [`SessionShape`] is recomputed from the current
//! contact count every time it is queried, so drag ownership and pinch
//! tracking can never both be active:
//!
//! - 0 contacts: [`SessionShape::Idle`]
//! - 1 contact: [`SessionShape::Single`], the candidate drag owner
//! - 2 or more: [`SessionShape::Pair`] of the two oldest contacts; later
//!   contacts are tracked but do not take part until an older one lifts

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier of a pointer as reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Physical kind of a pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    #[default]
    Mouse,
    /// Finger on a touch screen.
    Touch,
    /// Stylus.
    Pen,
}

/// One pressed pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Pointer identifier.
    pub id: PointerId,
    /// Pointer kind.
    pub kind: PointerKind,
    /// Last known position in view pixels.
    pub position: Point,
}

impl Contact {
    /// Creates a contact.
    #[must_use]
    pub const fn new(id: PointerId, kind: PointerKind, position: Point) -> Self {
        Self { id, kind, position }
    }
}

/// Shape of the current session, derived from the contact count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionShape {
    /// No pointer is down.
    Idle,
    /// Exactly one pointer is down.
    Single(Contact),
    /// Two or more pointers are down; holds the two oldest.
    Pair(Contact, Contact),
}

/// Active pointer contacts in press order.
#[derive(Clone, Debug, Default)]
pub struct PointerSession {
    contacts: SmallVec<[Contact; 4]>,
}

impl PointerSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pressed pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no pointer is pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Pressed pointers, oldest first.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Looks up a pressed pointer.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Records a press.
    ///
    /// A repeated press for a pointer that is already down only refreshes its
    /// position and keeps its place in the press order. Returns `true` if the
    /// pointer was new.
    pub fn press(&mut self, contact: Contact) -> bool {
        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
            existing.position = contact.position;
            return false;
        }
        self.contacts.push(contact);
        true
    }

    /// Updates the position of a pressed pointer.
    ///
    /// Returns the previous position, or `None` if the pointer is not down
    /// (for example a hovering mouse).
    pub fn move_to(&mut self, id: PointerId, position: Point) -> Option<Point> {
        let contact = self.contacts.iter_mut().find(|c| c.id == id)?;
        let previous = contact.position;
        contact.position = position;
        Some(previous)
    }

    /// Removes a pointer, returning its last contact if it was down.
    pub fn release(&mut self, id: PointerId) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(idx))
    }

    /// Forgets every contact.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Returns `true` if `id` is one of the two oldest contacts.
    #[must_use]
    pub fn is_tracked(&self, id: PointerId) -> bool {
        self.contacts.iter().take(2).any(|c| c.id == id)
    }

    /// Derives the session shape from the current contacts.
    #[must_use]
    pub fn shape(&self) -> SessionShape {
        match self.contacts.as_slice() {
            [] => SessionShape::Idle,
            [only] => SessionShape::Single(*only),
            [first, second, ..] => SessionShape::Pair(*first, *second),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Contact, PointerId, PointerKind, PointerSession, SessionShape};

    fn touch(id: u64, x: f64, y: f64) -> Contact {
        Contact::new(PointerId(id), PointerKind::Touch, Point::new(x, y))
    }

    #[test]
    fn shape_follows_contact_count() {
        let mut session = PointerSession::new();
        assert_eq!(session.shape(), SessionShape::Idle);

        session.press(touch(1, 0.0, 0.0));
        assert_eq!(session.shape(), SessionShape::Single(touch(1, 0.0, 0.0)));

        session.press(touch(2, 10.0, 0.0));
        assert_eq!(
            session.shape(),
            SessionShape::Pair(touch(1, 0.0, 0.0), touch(2, 10.0, 0.0))
        );

        session.release(PointerId(1));
        assert_eq!(session.shape(), SessionShape::Single(touch(2, 10.0, 0.0)));
    }

    #[test]
    fn third_contact_is_not_tracked_until_an_older_one_lifts() {
        let mut session = PointerSession::new();
        session.press(touch(1, 0.0, 0.0));
        session.press(touch(2, 10.0, 0.0));
        session.press(touch(3, 20.0, 0.0));

        assert!(session.is_tracked(PointerId(1)));
        assert!(session.is_tracked(PointerId(2)));
        assert!(!session.is_tracked(PointerId(3)));

        session.release(PointerId(1));
        assert!(session.is_tracked(PointerId(3)));
        assert_eq!(
            session.shape(),
            SessionShape::Pair(touch(2, 10.0, 0.0), touch(3, 20.0, 0.0))
        );
    }

    #[test]
    fn repeated_press_refreshes_position_only() {
        let mut session = PointerSession::new();
        assert!(session.press(touch(1, 0.0, 0.0)));
        assert!(session.press(touch(2, 5.0, 5.0)));
        assert!(!session.press(touch(1, 3.0, 3.0)));
        assert_eq!(session.len(), 2);
        assert_eq!(session.contacts()[0].position, Point::new(3.0, 3.0));
    }

    #[test]
    fn moving_unknown_pointer_is_ignored() {
        let mut session = PointerSession::new();
        assert_eq!(session.move_to(PointerId(9), Point::new(1.0, 1.0)), None);
        assert!(session.is_empty());

        session.press(touch(9, 0.0, 0.0));
        assert_eq!(
            session.move_to(PointerId(9), Point::new(1.0, 1.0)),
            Some(Point::new(0.0, 0.0))
        );
        assert_eq!(session.get(PointerId(9)).unwrap().position, Point::new(1.0, 1.0));
    }

    #[test]
    fn release_and_clear() {
        let mut session = PointerSession::new();
        session.press(touch(1, 0.0, 0.0));
        assert_eq!(session.release(PointerId(2)), None);
        assert_eq!(session.release(PointerId(1)), Some(touch(1, 0.0, 0.0)));
        session.press(touch(3, 0.0, 0.0));
        session.clear();
        assert!(session.is_empty());
    }
}
