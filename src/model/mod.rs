//! Runtime graph/token state: node ownership of tokens, hit-testing, selection
//! and drag-and-drop reassignment, plus the layout-to-window mapping.

mod graph;
mod ids;
mod mapper;
mod node;
mod token;
mod types;

pub use graph::{DEFAULT_SELECTION_DELTA, DEFAULT_TOKEN_SIZE, DragTarget, DropOutcome, Graph};
pub use ids::IdAllocator;
pub use mapper::GraphLayoutMapper;
pub use node::{GraphNode, Slot, TOKEN_RING};
pub use token::{Token, TokenKind};
pub use types::{Color, Edge, NodeId, Point, Shape, TokenId};
