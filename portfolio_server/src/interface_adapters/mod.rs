// Interface adapters: storage, credential policy, randomness and HTTP routes.

pub mod clock;
pub mod credentials;
pub mod routes;
pub mod storage;
pub mod utils;
