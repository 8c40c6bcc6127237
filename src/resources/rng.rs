use bevy_ecs::prelude::Resource;

/// Seeded random stream for in-play rolls (the platform pulverize coin
/// flip). Created from the session seed after level generation so a seeded
/// session replays identically.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);
