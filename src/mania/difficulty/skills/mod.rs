pub mod adjacency;
pub mod anchor;
pub mod cross;
pub mod density;
pub mod jack;
pub mod press;
pub mod release;
