pub mod trip;
pub mod wilaya;
