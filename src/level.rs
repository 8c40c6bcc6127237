//! Procedural level generation.
//!
//! Populates the world for one play session from a seeded random stream:
//! the player, the background, the camera-follow entity, a column of
//! platforms climbing to the top of the level, and the castle that ends it.
//!
//! Platform placement is constrained by the player's jump: each vertical
//! step is `max_jump_height - 0.5` minus a random amount of at most a third
//! of the jump height, so every platform stays reachable from the one below
//! with a single full-velocity jump.
//!
//! Placement probabilities are empirical balance carried over from the
//! reference game: 20% moving platforms, 10% springs (static platforms
//! only), 20% squirrels above the lower third, 40% coins.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::background::Background;
use crate::components::boxcollider::BoxCollider;
use crate::components::camerafollow::CameraFollow;
use crate::components::castle::Castle;
use crate::components::coin::Coin;
use crate::components::gravity::Gravity;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::HorizontalPatrol;
use crate::components::platform::{Platform, PlatformKind};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::spring::Spring;
use crate::components::squirrel::Squirrel;
use crate::components::state::{EntityState, State};
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;

/// Entities the orchestrator keeps track of after generation.
#[derive(Debug, Clone, Copy)]
pub struct LevelHandles {
    pub player: Entity,
    pub camera: Entity,
}

/// Populate `world` with a full level. The random stream is owned by this
/// invocation; the same seed always produces the same layout.
pub fn generate_level(
    world: &mut World,
    config: &GameConfig,
    rng: &mut fastrand::Rng,
) -> LevelHandles {
    let player = spawn_player(world, config);
    let camera = spawn_camera(world, player);
    spawn_background(world);

    let max_jump_height = config.max_jump_height();
    let mut y = Platform::HEIGHT / 2.0;
    let mut platforms = 0u32;

    while y < config.world_height - config.world_width / 2.0 {
        let kind = if rng.f32() > 0.8 {
            PlatformKind::Moving
        } else {
            PlatformKind::Static
        };
        let x = rng.f32() * (config.world_width - Platform::WIDTH) + Platform::WIDTH / 2.0;

        spawn_platform(world, kind, x, y);
        platforms += 1;

        if rng.f32() > 0.9 && kind != PlatformKind::Moving {
            spawn_spring(world, x, y + Platform::HEIGHT / 2.0 + Spring::HEIGHT / 2.0);
        }

        if y > config.world_height / 3.0 && rng.f32() > 0.8 {
            let squirrel_x = x + rng.f32();
            let squirrel_y = y + Squirrel::HEIGHT + rng.f32() * 2.0;
            spawn_squirrel(world, rng, squirrel_x, squirrel_y);
        }

        if rng.f32() > 0.6 {
            spawn_coin(
                world,
                x + rng.f32() - 0.5,
                y + Coin::HEIGHT + rng.f32() * 3.0,
            );
        }

        y += max_jump_height - 0.5;
        y -= rng.f32() * (max_jump_height / 3.0);
    }

    spawn_castle(world, config.world_width / 2.0, y);
    debug!("Generated level with {platforms} platforms, castle at y={y:.1}");

    LevelHandles { player, camera }
}

fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    world
        .spawn((
            Player,
            MapPosition::new(config.world_width / 2.0, 1.0),
            ZIndex(0),
            BoxCollider::new(Player::WIDTH, Player::HEIGHT),
            RigidBody::new(),
            Gravity,
            State::new(EntityState::Jump),
            Animation::new()
                .with_track(EntityState::Jump, "panda_jump")
                .with_track(EntityState::Fall, "panda_fall")
                .with_track(EntityState::Hit, "panda_hit"),
        ))
        .id()
}

fn spawn_camera(world: &mut World, target: Entity) -> Entity {
    world.spawn((CameraFollow::new(target),)).id()
}

fn spawn_background(world: &mut World) {
    world.spawn((Background, MapPosition::new(0.0, 0.0), ZIndex(-10)));
}

fn spawn_platform(world: &mut World, kind: PlatformKind, x: f32, y: f32) {
    let velocity = match kind {
        PlatformKind::Static => RigidBody::new(),
        PlatformKind::Moving => RigidBody::with_velocity(Platform::VELOCITY, 0.0),
    };
    let mut entity = world.spawn((
        Platform::new(kind),
        MapPosition::new(x, y),
        ZIndex(1),
        BoxCollider::new(Platform::WIDTH, Platform::HEIGHT),
        velocity,
        State::new(EntityState::Normal),
        Animation::new()
            .with_track(EntityState::Normal, "platform")
            .with_track(EntityState::Pulverizing, "platform_breaking"),
    ));
    if kind == PlatformKind::Moving {
        entity.insert(HorizontalPatrol);
    }
}

fn spawn_spring(world: &mut World, x: f32, y: f32) {
    world.spawn((
        Spring,
        MapPosition::new(x, y),
        ZIndex(2),
        BoxCollider::new(Spring::WIDTH, Spring::HEIGHT),
        State::new(EntityState::Normal),
        Animation::new().with_track(EntityState::Normal, "spring"),
    ));
}

fn spawn_squirrel(world: &mut World, rng: &mut fastrand::Rng, x: f32, y: f32) {
    let facing = if rng.f32() > 0.5 { 1.0 } else { -1.0 };
    world.spawn((
        Squirrel,
        MapPosition::new(x, y),
        ZIndex(2),
        BoxCollider::new(Squirrel::WIDTH, Squirrel::HEIGHT),
        RigidBody::with_velocity(facing * Squirrel::VELOCITY, 0.0),
        HorizontalPatrol,
        State::new(EntityState::Normal),
        Animation::new().with_track(EntityState::Normal, "squirrel_fly"),
    ));
}

fn spawn_coin(world: &mut World, x: f32, y: f32) {
    world.spawn((
        Coin,
        MapPosition::new(x, y),
        ZIndex(3),
        BoxCollider::new(Coin::WIDTH, Coin::HEIGHT),
        State::new(EntityState::Normal),
        Animation::new().with_track(EntityState::Normal, "coin_spin"),
    ));
}

fn spawn_castle(world: &mut World, x: f32, y: f32) {
    world.spawn((
        Castle,
        MapPosition::new(x, y),
        ZIndex(2),
        BoxCollider::new(Castle::WIDTH, Castle::HEIGHT),
        State::new(EntityState::Normal),
        Animation::new().with_track(EntityState::Normal, "castle"),
    ));
}
