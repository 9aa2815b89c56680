mod devexy;

pub use devexy::*;
