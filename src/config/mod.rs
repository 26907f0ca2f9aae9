/// Seed data loading from seed.toml
pub mod seed;
