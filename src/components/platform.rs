use bevy_ecs::prelude::Component;

/// Platform subtype chosen at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Static,
    Moving,
}

/// Tag for jumpable platforms.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    pub kind: PlatformKind,
}

impl Platform {
    pub const WIDTH: f32 = 2.0;
    pub const HEIGHT: f32 = 0.5;
    /// Horizontal patrol speed of moving platforms.
    pub const VELOCITY: f32 = 2.0;
    /// Seconds a pulverizing platform survives before removal.
    pub const PULVERIZE_TIME: f32 = 0.8;

    pub fn new(kind: PlatformKind) -> Self {
        Self { kind }
    }
}
