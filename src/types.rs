//! Core types for choice sets
//!
//! A [`ChoiceSet`] is the immutable result of a declaration: members and
//! groups keyed by name, plus the declaration order that governs
//! presentation. Construction goes through [`crate::ChoicesBuilder`]; once
//! built, every query here is total.

use std::collections::HashMap;
use std::slice;

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::display;

/// A single enumeration member: declared name, machine value and the
/// human-readable label shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member<V> {
    name: String,
    value: V,
    display: String,
}

impl<V> Member<V> {
    pub(crate) fn new(name: String, value: V, explicit_display: Option<String>) -> Self {
        let display = explicit_display.unwrap_or_else(|| display::title_case(&name));
        Self {
            name,
            value,
            display,
        }
    }

    /// Declared identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying machine value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Label: the explicit override verbatim, or the name with underscores
    /// replaced by spaces and each word title-cased.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A named, ordered collection of members nested one level below the set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<V> {
    name: String,
    display: String,
    members: Vec<Member<V>>,
}

impl<V> Group<V> {
    pub(crate) fn new(name: String, explicit_display: Option<String>, members: Vec<Member<V>>) -> Self {
        let display = explicit_display.unwrap_or_else(|| display::split_camel_case(&name));
        Self {
            name,
            display,
            members,
        }
    }

    /// Declared group key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label: the explicit override verbatim, or the key split at
    /// camel-case boundaries.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Members in the group's own declaration order.
    pub fn members(&self) -> &[Member<V>] {
        &self.members
    }

    /// Look up a member of this group by name.
    pub fn get(&self, name: &str) -> Option<&Member<V>> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// An immutable enumeration-with-display: members, groups and the
/// declaration order that presentation follows.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSet<V> {
    name: String,
    members: HashMap<String, Member<V>>,
    groups: HashMap<String, Group<V>>,
    declaration_order: Vec<String>,
}

impl<V> ChoiceSet<V> {
    pub(crate) fn new(
        name: String,
        members: HashMap<String, Member<V>>,
        groups: HashMap<String, Group<V>>,
        declaration_order: Vec<String>,
    ) -> Self {
        Self {
            name,
            members,
            groups,
            declaration_order,
        }
    }

    /// Name of the declared type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presentation sequence in declaration order: members as
    /// [`Choice::Item`], groups as [`Choice::Group`] with their own
    /// declaration order nested one level deep. A fresh iterator is
    /// produced on every call.
    pub fn choices(&self) -> Choices<'_, V> {
        Choices {
            set: self,
            keys: self.declaration_order.iter(),
        }
    }

    /// Look up any member by name, grouped members included.
    pub fn get(&self, name: &str) -> Option<&Member<V>> {
        self.members
            .get(name)
            .or_else(|| self.groups.values().find_map(|g| g.get(name)))
    }

    /// Label for a member or group key, or `None` if nothing by that name
    /// was declared.
    pub fn display(&self, name: &str) -> Option<&str> {
        if let Some(member) = self.get(name) {
            return Some(member.display());
        }
        self.groups.get(name).map(|g| g.display())
    }

    /// First declared member carrying `value`. Duplicate values resolve to
    /// the earliest declaration, mirroring enumeration alias lookup.
    pub fn by_value(&self, value: &V) -> Option<&Member<V>>
    where
        V: PartialEq,
    {
        self.members().find(|m| m.value() == value)
    }

    /// All members ignoring grouping, in declaration order with group
    /// members inline at their group's position.
    pub fn members(&self) -> impl Iterator<Item = &Member<V>> {
        self.declaration_order.iter().flat_map(|key| {
            match self.members.get(key) {
                Some(member) => slice::from_ref(member).iter(),
                None => self
                    .groups
                    .get(key)
                    .map(|g| g.members())
                    .unwrap_or_default()
                    .iter(),
            }
        })
    }

    /// Look up a group by its declared key.
    pub fn group(&self, key: &str) -> Option<&Group<V>> {
        self.groups.get(key)
    }

    /// Total member count, grouped members included.
    pub fn len(&self) -> usize {
        self.members.len() + self.groups.values().map(|g| g.members.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of the presentation sequence.
///
/// Serializes as the classic tuple shape: `[value, "Label"]` for items and
/// `["Group Label", [[value, "Label"], ...]]` for groups.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice<V> {
    /// `(value, display)` for a top-level member.
    Item(V, String),
    /// `(group_display, [(value, display), ...])` for a group. Exactly one
    /// nesting level; groups do not contain groups.
    Group(String, Vec<(V, String)>),
}

impl<V: Serialize> Serialize for Choice<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::Item(value, display) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(value)?;
                tuple.serialize_element(display)?;
                tuple.end()
            }
            Choice::Group(display, items) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(display)?;
                tuple.serialize_element(items)?;
                tuple.end()
            }
        }
    }
}

/// Lazy iterator over a set's presentation sequence. Restartable by calling
/// [`ChoiceSet::choices`] again; carries no state beyond its position.
pub struct Choices<'a, V> {
    set: &'a ChoiceSet<V>,
    keys: slice::Iter<'a, String>,
}

impl<'a, V: Clone> Iterator for Choices<'a, V> {
    type Item = Choice<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        if let Some(member) = self.set.members.get(key) {
            Some(Choice::Item(member.value.clone(), member.display.clone()))
        } else {
            let group = self.set.groups.get(key)?;
            let items = group
                .members
                .iter()
                .map(|m| (m.value.clone(), m.display.clone()))
                .collect();
            Some(Choice::Group(group.display.clone(), items))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, V: Clone> ExactSizeIterator for Choices<'a, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, value: i32) -> Member<i32> {
        Member::new(name.to_string(), value, None)
    }

    #[test]
    fn test_member_derived_display() {
        let m = member("red_panda", 1);
        assert_eq!(m.name(), "red_panda");
        assert_eq!(*m.value(), 1);
        assert_eq!(m.display(), "Red Panda");
    }

    #[test]
    fn test_member_explicit_display_verbatim() {
        let m = Member::new("red_panda".to_string(), 1, Some("Ailurus fulgens".to_string()));
        assert_eq!(m.display(), "Ailurus fulgens");
    }

    #[test]
    fn test_group_derived_display() {
        let g = Group::new("RedPandas".to_string(), None, vec![member("cub", 1)]);
        assert_eq!(g.display(), "Red Pandas");
        assert_eq!(g.members().len(), 1);
        assert_eq!(g.get("cub").unwrap().display(), "Cub");
        assert!(g.get("missing").is_none());
    }

    #[test]
    fn test_group_explicit_display_verbatim() {
        let g: Group<i32> = Group::new("RedPandas".to_string(), Some("Pandas".to_string()), vec![]);
        assert_eq!(g.display(), "Pandas");
    }

    #[test]
    fn test_choice_item_serializes_as_tuple() {
        let entry = Choice::Item(1, "Apple".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!([1, "Apple"]));
    }

    #[test]
    fn test_choice_group_serializes_as_tuple() {
        let entry = Choice::Group(
            "Citrus".to_string(),
            vec![(3, "Lemon".to_string()), (4, "Lime".to_string())],
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!(["Citrus", [[3, "Lemon"], [4, "Lime"]]]));
    }
}
