// Shared tuning constants for tree generation, animation and particles.

// Canopy
pub const ROSE_COUNT: usize = 60; // petals per rose tree
pub const GOLDEN_ANGLE: f32 = 137.5 * (std::f32::consts::PI / 180.0); // phyllotaxis spiral step
pub const CANOPY_SCALE_FACTOR: f32 = 1.8; // spread of the phyllotaxis spiral inside one canopy
pub const PETAL_RADIUS_STEP: f32 = 0.08; // radius = step * sqrt(i) * scale
pub const PETAL_HEIGHT_STEP: f32 = 0.1; // height = ln(i + 1) * step * scale
pub const PETAL_BASE_TILT: f32 = std::f32::consts::PI / 3.0; // mesh tilt of petal 0
pub const PETAL_TILT_SPAN: f32 = 0.3; // extra tilt gained across the canopy
pub const CORE_GLOW_OFFSET: f32 = 0.1; // glow sphere height in canopy space

// Petal animation (per-call blend, not per-second)
pub const PETAL_SMOOTHING: f32 = 0.1;
pub const PETAL_SCALE_IDLE: f32 = 1.0;
pub const PETAL_SCALE_HOVERED: f32 = 1.3;
pub const PETAL_SCALE_CLICKED: f32 = 0.9;
pub const PETAL_HOVER_LIFT: f32 = 0.1;

// Trunk and branches
pub const TRUNK_BASE_RADIUS: f32 = 0.08; // multiplied by tree scale
pub const TRUNK_TOP_RADIUS: f32 = 0.04; // multiplied by tree scale
pub const TRUNK_RADIAL_SEGMENTS: u32 = 8;
pub const BRANCH_BASE_RADIUS: f32 = 0.04;
pub const BRANCH_TOP_RADIUS: f32 = 0.02;
pub const BRANCH_RADIAL_SEGMENTS: u32 = 5;
pub const BRANCH_MIN_STEM_LENGTH: f32 = 1.0; // branches only above this stem length

// Wind sway
pub const WIND_CALM: f32 = 0.02;
pub const WIND_STORM: f32 = 0.3;
pub const SWAY_SPEED_CALM: f32 = 1.0;
pub const SWAY_SPEED_STORM: f32 = 8.0;

// Forest
pub const FOREST_COUNT: usize = 60;
pub const FOREST_INNER_RADIUS: f32 = 2.0; // keeps the hero tree clear
pub const FOREST_RADIUS: f32 = 15.0;
pub const GROUND_Y: f32 = -1.0;
pub const TREE_MIN_HEIGHT: f32 = 2.0;
pub const TREE_HEIGHT_SPAN: f32 = 4.0;
pub const TREE_MIN_SCALE: f32 = 0.8;
pub const TREE_SCALE_SPAN: f32 = 0.8;
pub const PRIMARY_COLOR_CHANCE: f64 = 0.7;

// Hero tree in the middle of the forest
pub const HERO_SCALE: f32 = 2.0;
pub const HERO_STEM_LENGTH: f32 = 4.0;
pub const HERO_BLOOM_INTENSITY: f32 = 2.0;

// World spin (radians per second)
pub const WORLD_SPIN_CALM: f32 = 0.05;
pub const WORLD_SPIN_STORM: f32 = 0.2;

// Every time-driven angular rate is a multiple of 0.05 rad/s, so all motion
// repeats after 2π / 0.05 seconds. Elapsed time is reduced by this before it
// is narrowed to f32.
pub const MOTION_PERIOD_SEC: f64 = 40.0 * std::f64::consts::PI;

// Particles
pub const POOL_CAPACITY: usize = 1000;
pub const PARTICLE_DENSITY_CALM: usize = 300;
pub const PARTICLE_DENSITY_STORM: usize = 1500; // clamped to the pool capacity
pub const PARTICLE_COLOR_HEX: &str = "#fff0f5";
pub const PARTICLE_OPACITY: f32 = 0.8;

// Seed mixing for independent sub-generators
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
