pub mod params;

pub use params::ParamsRunQa;
