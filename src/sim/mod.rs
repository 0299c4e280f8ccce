//! Game simulation for all three demos
//!
//! Nothing in here reads the clock, opens a window or touches the GPU.
//! Time arrives as `dt`, randomness comes from a seeded [`RngState`].

pub mod aabb;
pub mod ai;
pub mod entity;
pub mod map;
pub mod platformer;
pub mod pong;
pub mod rng;
pub mod scene;
pub mod timestep;

pub use aabb::{Aabb, boxes_overlap};
pub use ai::{Ai, AiCommand, AiKind, AiState};
pub use entity::{Animation, CollisionFlags, Entity, EntityKind, Facing};
pub use map::TileMap;
pub use platformer::{PlatformerEvent, PlatformerInput, PlatformerPhase, PlatformerState};
pub use pong::{PongEvent, PongInput, PongPhase, PongState, Side};
pub use rng::RngState;
pub use scene::{SceneState, SpinningSprite, TransformOrder};
pub use timestep::FixedTimestep;
