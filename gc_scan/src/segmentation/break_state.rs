// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The grapheme cluster boundary rules from
//! [UAX #29](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules),
//! encoded as a state machine that only ever looks at the *next* code point.
//!
//! The machine state ([`BreakState`]) remembers just enough of what came before (e.g.
//! "inside an emoji, just saw a ZWJ", or "odd number of regional indicators so far") so
//! that rules like GB11 and GB12/13, which are written with unbounded left context, can
//! be resolved one code point at a time.
//!
//! Each entry of the rule table is keyed on `(state, property)`, where either side can
//! be a wildcard. When no exact entry exists, the `(state, any)` and `(any, property)`
//! entries are consulted: the new state always comes from `(any, property)`, and the
//! boundary decision comes from whichever of the two has the lower rule number (i.e. the
//! rule that appears first in UAX #29).

use super::{GraphemeProperty, classify};

/// State of the boundary rule machine after consuming a code point.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum BreakState {
    #[default]
    Any,
    Cr,
    ControlLf,
    L,
    LvV,
    LvtT,
    Prepend,
    ExtendedPictographic,
    ExtendedPictographicZwj,
    RiOdd,
    RiEven,
}

/// Result of feeding one code point to the rule machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: BreakState,
    /// Property of the code point that was fed in.
    pub property: GraphemeProperty,
    /// Whether there is a cluster boundary *before* the code point that was fed in.
    pub is_boundary: bool,
}

/// One entry in the rule table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Rule {
    next: BreakState,
    is_boundary: bool,
    /// Rule number from UAX #29 times ten (GB9a is 91). GB999 style defaults are 9990.
    rule_number: u16,
}

const BREAK: bool = true;
const NO_BREAK: bool = false;

const fn rule(next: BreakState, is_boundary: bool, rule_number: u16) -> Option<Rule> {
    Some(Rule {
        next,
        is_boundary,
        rule_number,
    })
}

/// The rule table. `property == None` is the "any property" wildcard.
#[rustfmt::skip]
fn lookup(state: BreakState, property: Option<GraphemeProperty>) -> Option<Rule> {
    use BreakState as S;
    use GraphemeProperty as P;

    match (state, property) {
        // GB5.
        (S::Any, Some(P::Cr))                        => rule(S::Cr, BREAK, 50),
        (S::Any, Some(P::Lf | P::Control))           => rule(S::ControlLf, BREAK, 50),

        // GB4.
        (S::Cr | S::ControlLf, None)                 => rule(S::Any, BREAK, 40),

        // GB3.
        (S::Cr, Some(P::Lf))                         => rule(S::ControlLf, NO_BREAK, 30),

        // GB6.
        (S::Any, Some(P::L))                         => rule(S::L, BREAK, 9990),
        (S::L, Some(P::L))                           => rule(S::L, NO_BREAK, 60),
        (S::L, Some(P::V | P::Lv))                   => rule(S::LvV, NO_BREAK, 60),
        (S::L, Some(P::Lvt))                         => rule(S::LvtT, NO_BREAK, 60),

        // GB7.
        (S::Any, Some(P::Lv | P::V))                 => rule(S::LvV, BREAK, 9990),
        (S::LvV, Some(P::V))                         => rule(S::LvV, NO_BREAK, 70),
        (S::LvV, Some(P::T))                         => rule(S::LvtT, NO_BREAK, 70),

        // GB8.
        (S::Any, Some(P::Lvt | P::T))                => rule(S::LvtT, BREAK, 9990),
        (S::LvtT, Some(P::T))                        => rule(S::LvtT, NO_BREAK, 80),

        // GB9.
        (S::Any, Some(P::Extend | P::Zwj))           => rule(S::Any, NO_BREAK, 90),

        // GB9a.
        (S::Any, Some(P::SpacingMark))               => rule(S::Any, NO_BREAK, 91),

        // GB9b.
        (S::Any, Some(P::Prepend))                   => rule(S::Prepend, BREAK, 9990),
        (S::Prepend, None)                           => rule(S::Any, NO_BREAK, 92),

        // GB11.
        (S::Any, Some(P::ExtendedPictographic))      => rule(S::ExtendedPictographic, BREAK, 9990),
        (S::ExtendedPictographic, Some(P::Extend))   => rule(S::ExtendedPictographic, NO_BREAK, 110),
        (S::ExtendedPictographic, Some(P::Zwj))      => rule(S::ExtendedPictographicZwj, NO_BREAK, 110),
        (S::ExtendedPictographicZwj,
         Some(P::ExtendedPictographic))              => rule(S::ExtendedPictographic, NO_BREAK, 110),

        // GB12 and GB13.
        (S::Any, Some(P::RegionalIndicator))         => rule(S::RiOdd, BREAK, 9990),
        (S::RiOdd, Some(P::RegionalIndicator))       => rule(S::RiEven, NO_BREAK, 120),
        (S::RiEven, Some(P::RegionalIndicator))      => rule(S::RiOdd, BREAK, 120),

        _ => None,
    }
}

/// Feed the next code point `ch` to the rule machine, which is currently in `state`.
///
/// Returns the new state, the property of `ch`, and whether a boundary exists between
/// the previous code point and `ch`. When starting a fresh scan use
/// [`BreakState::Any`]; the boundary flag for the very first code point of a source is
/// meaningless and should be ignored.
#[must_use]
pub fn transition(state: BreakState, ch: char) -> Transition {
    transition_with_property(state, classify(ch))
}

/// Same as [`transition`] when the property of the next code point is already known.
#[must_use]
pub fn transition_with_property(
    state: BreakState,
    property: GraphemeProperty,
) -> Transition {
    let into_transition = |it: Rule| Transition {
        state: it.next,
        property,
        is_boundary: it.is_boundary,
    };

    // A specific transition wins outright.
    if let Some(it) = lookup(state, Some(property)) {
        return into_transition(it);
    }

    // Otherwise try the less specific ones.
    match (lookup(state, None), lookup(BreakState::Any, Some(property))) {
        (Some(any_property), Some(any_state)) => {
            let is_boundary = if any_property.rule_number < any_state.rule_number {
                any_property.is_boundary
            } else {
                any_state.is_boundary
            };
            Transition {
                state: any_state.next,
                property,
                is_boundary,
            }
        }
        (Some(it), None) | (None, Some(it)) => into_transition(it),
        // GB999: Any ÷ Any.
        (None, None) => Transition {
            state: BreakState::Any,
            property,
            is_boundary: BREAK,
        },
    }
}
