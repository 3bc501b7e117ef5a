mod resolution;

pub use resolution::ResolutionServices;
