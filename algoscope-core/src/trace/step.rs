//! Step Records
//!
//! Defines the discrete actions an engine reports while it works.

use serde::{Deserialize, Serialize};

use crate::tree::Rotation;

/// One discrete action taken by an engine.
///
/// Array-based engines (sorting, searching, heap, hash table) refer to
/// positions by index. Graph engines refer to vertices by their slot, the
/// position at which the vertex was added to the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Two array positions are compared.
    Compare { left: usize, right: usize },
    /// Two array positions exchange values.
    Swap { left: usize, right: usize },
    /// A position holds its final sorted value.
    MarkSorted { index: usize },

    /// A tree node is visited during traversal or descent.
    VisitNode { value: i64 },
    /// A rotation is applied at the node holding `pivot`.
    Rotate { rotation: Rotation, pivot: i64 },

    /// A graph vertex is visited.
    VisitVertex { slot: usize },
    /// A graph vertex joins the BFS frontier.
    Enqueue { slot: usize },
    /// Dijkstra fixes the final distance of a vertex.
    Settle { slot: usize, distance: u64 },
    /// An edge relaxation lowers a tentative distance.
    Relax { from: usize, to: usize, distance: u64 },

    /// A slot or index is inspected.
    Probe { index: usize },
    /// A probed slot is occupied by another key.
    Collision { index: usize },
    /// A key is written into a slot.
    Place { index: usize },
    /// A slot is emptied.
    Clear { index: usize },
    /// The sought value sits at `index`.
    Found { index: usize },
}
