// Why is the prelude external to the `tennis_match` crate? Full include paths
// stay mandatory inside `tennis_match` itself, and a prelude that lives there
// would undermine this: auto-import starts preferring `crate::prelude::Foo`
// over `crate::foo::Foo`.
//
// What to put in prelude? Scoring concepts: sides, tracks, rounds, events.
// Auxiliary concepts (test utilities) remain behind namespaces.

pub use tennis_match::event::*;
pub use tennis_match::hooks::*;
pub use tennis_match::player::*;
pub use tennis_match::round::*;
pub use tennis_match::score_track::*;
pub use tennis_match::side::*;
pub use tennis_match::*;
