//! Declarative `choices!` macro
//!
//! Expands a declarative enum body into a real Rust enum plus the builder
//! calls that assemble its [`crate::ChoiceSet`]. Group bodies use the
//! `group` keyword; the author never names the group machinery, and nothing
//! about a group declaration outlives the macro expansion it appears in.

/// Declare an enum whose members carry `(value, display)` choices.
///
/// Members are written `Name = value` or `Name = (value, "Label")`; groups
/// are written `group Key { ... }` or `group Key: "Label" { ... }` and nest
/// exactly one level. Member labels default to the name with underscores
/// replaced by spaces and words title-cased, group labels to the key split
/// at camel-case boundaries.
///
/// The generated enum has one variant per member (group members included,
/// flattened in declaration order) and gains:
///
/// - `choices()` — presentation sequence in declaration order
/// - `display()`, `value()`, `name()` — per-member accessors
/// - `from_name()`, `from_value()` — lookups over all members
/// - `ALL` / `iter()` — every member ignoring grouping
/// - `choice_set()` — the backing [`crate::ChoiceSet`]
///
/// A declaration that misuses a reserved name (`choices` at the top level,
/// `display` inside a group) or reuses a group key panics on first access
/// to the set, which is this crate's rendition of a declaration-time error.
///
/// ```
/// use choices::{choices, Choice};
///
/// choices! {
///     pub enum Fruit: i32 {
///         Apple = 1,
///         Banana = (2, "Golden Banana"),
///         group Citrus {
///             Lemon = 3,
///             Lime = 4,
///         },
///     }
/// }
///
/// assert_eq!(Fruit::Banana.display(), "Golden Banana");
/// assert_eq!(
///     Fruit::choices().collect::<Vec<_>>(),
///     vec![
///         Choice::Item(1, "Apple".to_string()),
///         Choice::Item(2, "Golden Banana".to_string()),
///         Choice::Group(
///             "Citrus".to_string(),
///             vec![(3, "Lemon".to_string()), (4, "Lime".to_string())],
///         ),
///     ],
/// );
/// ```
#[macro_export]
macro_rules! choices {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $vty:ty { $($body:tt)* }
    ) => {
        $crate::__choices! {
            @munch
            meta = [$(#[$meta])*],
            vis = [$vis],
            name = $name,
            vty = [$vty],
            variants = [],
            arms = [],
            calls = [],
            rest = [$($body)*]
        }
    };
}

/// Recursive worker behind [`choices!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __choices {
    // Declaration body exhausted: emit the enum and its impl.
    (
        @munch
        meta = [$(#[$meta:meta])*],
        vis = [$vis:vis],
        name = $name:ident,
        vty = [$vty:ty],
        variants = [$($variant:ident,)*],
        arms = [$($arm_name:ident => $arm_value:expr;)*],
        calls = [$($calls:tt)*],
        rest = []
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every member in declaration order, group members inline at
            /// their group's position.
            $vis const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Backing choice set carrying declaration order and grouping.
            $vis fn choice_set() -> &'static $crate::ChoiceSet<$vty> {
                static SET: $crate::__private::Lazy<$crate::ChoiceSet<$vty>> =
                    $crate::__private::Lazy::new(|| {
                        $crate::ChoicesBuilder::new(stringify!($name))
                            $($calls)*
                            .build()
                            .unwrap_or_else(|e| {
                                panic!("invalid {} declaration: {}", stringify!($name), e)
                            })
                    });
                &SET
            }

            /// Presentation sequence in declaration order; fresh on every
            /// call.
            $vis fn choices() -> $crate::Choices<'static, $vty> {
                Self::choice_set().choices()
            }

            /// Declared member name.
            $vis fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Underlying machine value.
            $vis fn value(self) -> $vty {
                match self {
                    $(Self::$arm_name => $arm_value,)*
                }
            }

            /// Human-readable label for this member.
            $vis fn display(self) -> &'static str {
                let name = self.name();
                Self::choice_set().display(name).unwrap_or(name)
            }

            /// Iterate every member ignoring grouping.
            $vis fn iter() -> impl Iterator<Item = Self> {
                Self::ALL.iter().copied()
            }

            /// Look up a member by its declared name.
            $vis fn from_name(name: &str) -> Option<Self> {
                Self::iter().find(|member| member.name() == name)
            }

            /// Look up the first declared member carrying `value`.
            $vis fn from_value(value: &$vty) -> Option<Self> {
                Self::iter().find(|member| &member.value() == value)
            }
        }
    };

    // Stray separator between entries.
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [, $($rest:tt)*]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)*],
            arms = [$($arms)*],
            calls = [$($calls)*],
            rest = [$($rest)*]
        }
    };

    // Group with an explicit label.
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [group $gname:ident : $gdisp:literal { $($gbody:tt)* } $($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)*],
            arms = [$($arms)*],
            calls = [$($calls)*],
            group = [$crate::GroupBuilder::new(stringify!($gname)).display($gdisp)],
            gbody = [$($gbody)*],
            rest = [$($rest)*]
        }
    };

    // Group with a derived label.
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [group $gname:ident { $($gbody:tt)* } $($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)*],
            arms = [$($arms)*],
            calls = [$($calls)*],
            group = [$crate::GroupBuilder::new(stringify!($gname))],
            gbody = [$($gbody)*],
            rest = [$($rest)*]
        }
    };

    // Member with an explicit label.
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [$mname:ident = ($mval:expr, $mdisp:expr), $($rest:tt)*]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)* .member_with_display(stringify!($mname), $mval, $mdisp)],
            rest = [$($rest)*]
        }
    };
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [$mname:ident = ($mval:expr, $mdisp:expr)]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)* .member_with_display(stringify!($mname), $mval, $mdisp)],
            rest = []
        }
    };

    // Member with a derived label.
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [$mname:ident = $mval:expr, $($rest:tt)*]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)* .member(stringify!($mname), $mval)],
            rest = [$($rest)*]
        }
    };
    (
        @munch
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        rest = [$mname:ident = $mval:expr]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)* .member(stringify!($mname), $mval)],
            rest = []
        }
    };

    // Group body exhausted: attach the group and resume the outer body.
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @munch
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)*],
            arms = [$($arms)*],
            calls = [$($calls)* .group($($group)*)],
            rest = [$($rest)*]
        }
    };

    // Stray separator inside a group body.
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [, $($gbody:tt)*],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)*],
            arms = [$($arms)*],
            calls = [$($calls)*],
            group = [$($group)*],
            gbody = [$($gbody)*],
            rest = [$($rest)*]
        }
    };

    // Group member with an explicit label.
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [$mname:ident = ($mval:expr, $mdisp:expr), $($gbody:tt)*],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)*],
            group = [$($group)* .member_with_display(stringify!($mname), $mval, $mdisp)],
            gbody = [$($gbody)*],
            rest = [$($rest)*]
        }
    };
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [$mname:ident = ($mval:expr, $mdisp:expr)],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)*],
            group = [$($group)* .member_with_display(stringify!($mname), $mval, $mdisp)],
            gbody = [],
            rest = [$($rest)*]
        }
    };

    // Group member with a derived label.
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [$mname:ident = $mval:expr, $($gbody:tt)*],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)*],
            group = [$($group)* .member(stringify!($mname), $mval)],
            gbody = [$($gbody)*],
            rest = [$($rest)*]
        }
    };
    (
        @group
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        vty = [$($vty:tt)*],
        variants = [$($variants:tt)*],
        arms = [$($arms:tt)*],
        calls = [$($calls:tt)*],
        group = [$($group:tt)*],
        gbody = [$mname:ident = $mval:expr],
        rest = [$($rest:tt)*]
    ) => {
        $crate::__choices! {
            @group
            meta = [$($meta)*],
            vis = [$($vis)*],
            name = $name,
            vty = [$($vty)*],
            variants = [$($variants)* $mname,],
            arms = [$($arms)* $mname => $mval;],
            calls = [$($calls)*],
            group = [$($group)* .member(stringify!($mname), $mval)],
            gbody = [],
            rest = [$($rest)*]
        }
    };
}
