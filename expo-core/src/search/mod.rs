//! The search module contains logic to improve an assignment by exploring its neighborhood.

mod explored;
pub use self::explored::{ExploredPolicy, ExploredSet};

mod local_search;
pub use self::local_search::LocalSearch;

mod neighborhood;
pub use self::neighborhood::{NeighborhoodPolicy, Relocation, RelocationNeighborhood};
