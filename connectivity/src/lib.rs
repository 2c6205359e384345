pub mod error;
pub mod sequence;
pub mod quick_find;
pub mod quick_union;
pub mod weighted;
pub mod algorithm;
pub mod input;

pub use algorithm::{Algorithm, Sequence};
pub use error::{ConnectivityError, InputError, UnknownAlgorithm};
pub use input::{Applied, PairStream};
pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use sequence::DynamicConnectivity;
pub use weighted::QuickUnionW;
