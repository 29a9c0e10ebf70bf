mod bugreport;
mod chunk;
mod complete;
mod convert;
mod help;
mod locate;
pub mod utils;
