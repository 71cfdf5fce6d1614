pub mod data;
pub mod entities;
pub mod error;
pub mod prelude;
pub mod report;
pub mod traits;
