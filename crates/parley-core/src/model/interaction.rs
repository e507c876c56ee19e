use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

///
/// InteractionKind
/// The operation a shape serves.
///

#[derive(
    CandidType,
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[remain::sorted]
pub enum InteractionKind {
    Create,
    Edit,
    Get,
}

impl InteractionKind {
    /// Every kind, in synthesis order.
    pub const ALL: [Self; 3] = [Self::Create, Self::Edit, Self::Get];

    const fn bit(self) -> u8 {
        match self {
            Self::Create => 0b001,
            Self::Edit => 0b010,
            Self::Get => 0b100,
        }
    }
}

///
/// InteractionKinds
///
/// Set of interaction kinds a field participates in.
/// Fields must carry a non-empty set; emptiness is checked when the field
/// descriptor is built, not here.
///

#[derive(CandidType, Clone, Copy, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InteractionKinds(u8);

impl InteractionKinds {
    pub const NONE: Self = Self(0);
    pub const CREATE: Self = Self(InteractionKind::Create.bit());
    pub const EDIT: Self = Self(InteractionKind::Edit.bit());
    pub const GET: Self = Self(InteractionKind::Get.bit());
    pub const ALL: Self = Self(Self::CREATE.0 | Self::EDIT.0 | Self::GET.0);

    #[must_use]
    pub const fn contains(self, kind: InteractionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }

    /// Member kinds, in synthesis order.
    pub fn iter(self) -> impl Iterator<Item = InteractionKind> {
        InteractionKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<InteractionKind> for InteractionKinds {
    fn from(kind: InteractionKind) -> Self {
        Self(kind.bit())
    }
}

impl FromIterator<InteractionKind> for InteractionKinds {
    fn from_iter<I: IntoIterator<Item = InteractionKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, kind| acc | kind)
    }
}

impl BitOr for InteractionKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<InteractionKind> for InteractionKinds {
    type Output = Self;

    fn bitor(self, rhs: InteractionKind) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign for InteractionKinds {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for InteractionKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for InteractionKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        let labels: Vec<String> = self.iter().map(|kind| kind.to_string()).collect();
        f.write_str(&labels.join("|"))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_contains_each_member() {
        let kinds = InteractionKinds::CREATE | InteractionKinds::GET;

        assert!(kinds.contains(InteractionKind::Create));
        assert!(!kinds.contains(InteractionKind::Edit));
        assert!(kinds.contains(InteractionKind::Get));
        assert_eq!(kinds.to_string(), "Create|Get");
    }

    #[test]
    fn all_is_the_union_of_every_kind() {
        let collected: InteractionKinds = InteractionKind::ALL.into_iter().collect();

        assert_eq!(collected, InteractionKinds::ALL);
        assert_eq!(InteractionKinds::ALL.iter().count(), 3);
    }

    #[test]
    fn none_is_empty() {
        assert!(InteractionKinds::NONE.is_empty());
        assert!(InteractionKinds::default().is_empty());
        assert!(!InteractionKinds::EDIT.is_empty());
    }
}
