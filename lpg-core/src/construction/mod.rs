//! Contains tour construction heuristics.

mod nearest_neighbor;
pub use self::nearest_neighbor::create_nearest_neighbor_tour;
