//! Two-phase builders for choice sets
//!
//! Phase one records bindings fluently in declaration order, phase two
//! (`build`) validates and produces the immutable [`ChoiceSet`]. All error
//! conditions surface from `build`; a set that fails validation never comes
//! into existence.

use std::collections::{HashMap, HashSet};

use crate::error::ChoicesError;
use crate::types::{ChoiceSet, Group, Member};

/// Name reserved at the set level for the presentation query.
const RESERVED_SET_NAME: &str = "choices";
/// Name reserved inside groups for the label accessor.
const RESERVED_GROUP_NAME: &str = "display";

enum Entry<V> {
    Member {
        name: String,
        value: V,
        display: Option<String>,
    },
    Group(GroupBuilder<V>),
}

/// Builder for a nested group of members.
///
/// Consumed by [`ChoicesBuilder::group`]; the group is validated and built
/// together with its enclosing set.
pub struct GroupBuilder<V> {
    name: String,
    display: Option<String>,
    members: Vec<(String, V, Option<String>)>,
}

impl<V> GroupBuilder<V> {
    /// Start a group under `name`. Without an explicit display, the label
    /// is derived from the name by camel-case splitting.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: None,
            members: Vec::new(),
        }
    }

    /// Set an explicit label for the group as a whole.
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Add a member with an auto-derived label.
    pub fn member(mut self, name: impl Into<String>, value: V) -> Self {
        self.members.push((name.into(), value, None));
        self
    }

    /// Add a member with an explicit label.
    pub fn member_with_display(
        mut self,
        name: impl Into<String>,
        value: V,
        display: impl Into<String>,
    ) -> Self {
        self.members.push((name.into(), value, Some(display.into())));
        self
    }

    fn build(self) -> Result<Group<V>, ChoicesError> {
        let members = self
            .members
            .into_iter()
            .map(|(name, value, display)| {
                if name == RESERVED_GROUP_NAME {
                    return Err(ChoicesError::ReservedName {
                        name,
                        context: "group member",
                    });
                }
                Ok(Member::new(name, value, display))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Group::new(self.name, self.display, members))
    }
}

/// Builder for a [`ChoiceSet`].
///
/// Entries are recorded in call order, which becomes the set's declaration
/// order and governs the output of [`ChoiceSet::choices`].
pub struct ChoicesBuilder<V> {
    name: String,
    entries: Vec<Entry<V>>,
}

impl<V> ChoicesBuilder<V> {
    /// Start a choice set under the declared type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add a top-level member with an auto-derived label.
    pub fn member(mut self, name: impl Into<String>, value: V) -> Self {
        self.entries.push(Entry::Member {
            name: name.into(),
            value,
            display: None,
        });
        self
    }

    /// Add a top-level member with an explicit label.
    pub fn member_with_display(
        mut self,
        name: impl Into<String>,
        value: V,
        display: impl Into<String>,
    ) -> Self {
        self.entries.push(Entry::Member {
            name: name.into(),
            value,
            display: Some(display.into()),
        });
        self
    }

    /// Add a nested group at this position of the declaration.
    pub fn group(mut self, group: GroupBuilder<V>) -> Self {
        self.entries.push(Entry::Group(group));
        self
    }

    /// Validate the recorded declaration and produce the immutable set.
    ///
    /// Fails with [`ChoicesError::DuplicateGroupKey`] when a group key is
    /// bound twice, [`ChoicesError::DuplicateKey`] when any name is reused,
    /// and [`ChoicesError::ReservedName`] when a declared name collides
    /// with the API (`choices` at the set level, `display` inside groups).
    pub fn build(self) -> Result<ChoiceSet<V>, ChoicesError> {
        let mut members = HashMap::new();
        let mut groups: HashMap<String, Group<V>> = HashMap::new();
        let mut declaration_order = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in self.entries {
            match entry {
                Entry::Member {
                    name,
                    value,
                    display,
                } => {
                    if name == RESERVED_SET_NAME {
                        return Err(ChoicesError::ReservedName {
                            name,
                            context: "member",
                        });
                    }
                    if !seen.insert(name.clone()) {
                        return Err(ChoicesError::DuplicateKey(name));
                    }
                    declaration_order.push(name.clone());
                    members.insert(name.clone(), Member::new(name, value, display));
                }
                Entry::Group(builder) => {
                    let group = builder.build()?;
                    let key = group.name().to_string();
                    if groups.contains_key(&key) {
                        return Err(ChoicesError::DuplicateGroupKey(key));
                    }
                    if key == RESERVED_SET_NAME {
                        return Err(ChoicesError::ReservedName {
                            name: key,
                            context: "group",
                        });
                    }
                    if !seen.insert(key.clone()) {
                        return Err(ChoicesError::DuplicateKey(key));
                    }
                    for member in group.members() {
                        if !seen.insert(member.name().to_string()) {
                            return Err(ChoicesError::DuplicateKey(member.name().to_string()));
                        }
                    }
                    declaration_order.push(key.clone());
                    groups.insert(key, group);
                }
            }
        }

        log::debug!(
            "built choice set: {} ({} entries, {} groups)",
            self.name,
            declaration_order.len(),
            groups.len()
        );
        Ok(ChoiceSet::new(self.name, members, groups, declaration_order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Choice;

    fn fruit() -> ChoiceSet<i32> {
        ChoicesBuilder::new("Fruit")
            .member("Apple", 1)
            .member_with_display("Banana", 2, "Golden Banana")
            .group(GroupBuilder::new("Citrus").member("Lemon", 3).member("Lime", 4))
            .member("Kiwi", 6)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_orders_entries_by_declaration() {
        let set = fruit();
        let choices: Vec<_> = set.choices().collect();
        assert_eq!(
            choices,
            vec![
                Choice::Item(1, "Apple".to_string()),
                Choice::Item(2, "Golden Banana".to_string()),
                Choice::Group(
                    "Citrus".to_string(),
                    vec![(3, "Lemon".to_string()), (4, "Lime".to_string())],
                ),
                Choice::Item(6, "Kiwi".to_string()),
            ]
        );
    }

    #[test]
    fn test_lookup_covers_group_members() {
        let set = fruit();
        assert_eq!(set.get("Lemon").unwrap().display(), "Lemon");
        assert_eq!(set.display("Citrus"), Some("Citrus"));
        assert_eq!(set.display("Banana"), Some("Golden Banana"));
        assert_eq!(set.display("missing"), None);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_members_ignores_grouping_in_declaration_order() {
        let names: Vec<_> = fruit().members().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec!["Apple", "Banana", "Lemon", "Lime", "Kiwi"]);
    }

    #[test]
    fn test_by_value_prefers_first_declaration() {
        let set = ChoicesBuilder::new("Alias")
            .member("canonical", 1)
            .member("alias", 1)
            .build()
            .unwrap();
        assert_eq!(set.by_value(&1).unwrap().name(), "canonical");
        assert!(set.by_value(&2).is_none());
    }

    #[test]
    fn test_duplicate_group_key_rejected() {
        let err = ChoicesBuilder::new("Bad")
            .group(GroupBuilder::new("G").member("A", 1))
            .group(GroupBuilder::new("G").member("B", 2))
            .build()
            .unwrap_err();
        assert_eq!(err, ChoicesError::DuplicateGroupKey("G".to_string()));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let err = ChoicesBuilder::new("Bad")
            .member("A", 1)
            .member("A", 2)
            .build()
            .unwrap_err();
        assert_eq!(err, ChoicesError::DuplicateKey("A".to_string()));
    }

    #[test]
    fn test_member_name_colliding_with_group_member_rejected() {
        let err = ChoicesBuilder::new("Bad")
            .member("Lemon", 1)
            .group(GroupBuilder::new("Citrus").member("Lemon", 3))
            .build()
            .unwrap_err();
        assert_eq!(err, ChoicesError::DuplicateKey("Lemon".to_string()));
    }

    #[test]
    fn test_reserved_member_name_rejected() {
        let err = ChoicesBuilder::new("Bad").member("choices", 1).build().unwrap_err();
        assert_eq!(
            err,
            ChoicesError::ReservedName {
                name: "choices".to_string(),
                context: "member",
            }
        );
    }

    #[test]
    fn test_reserved_group_key_rejected() {
        let err = ChoicesBuilder::new("Bad")
            .group(GroupBuilder::new("choices").member("A", 1))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ChoicesError::ReservedName {
                name: "choices".to_string(),
                context: "group",
            }
        );
    }

    #[test]
    fn test_reserved_group_member_name_rejected() {
        let err = ChoicesBuilder::new("Bad")
            .group(GroupBuilder::new("G").member("display", 1))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ChoicesError::ReservedName {
                name: "display".to_string(),
                context: "group member",
            }
        );
    }

    #[test]
    fn test_group_display_override() {
        let set = ChoicesBuilder::new("Regions")
            .group(
                GroupBuilder::new("UnitedStates")
                    .member("new_york", 1)
                    .member("texas", 2),
            )
            .group(GroupBuilder::new("Benelux").display("Low Countries").member("belgium", 3))
            .build()
            .unwrap();
        assert_eq!(set.group("UnitedStates").unwrap().display(), "United States");
        assert_eq!(set.group("Benelux").unwrap().display(), "Low Countries");
        assert_eq!(set.get("new_york").unwrap().display(), "New York");
    }

    #[test]
    fn test_empty_set_builds() {
        let set = ChoicesBuilder::<i32>::new("Empty").build().unwrap();
        assert!(set.is_empty());
        assert_eq!(set.choices().count(), 0);
    }
}
