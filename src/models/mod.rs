pub mod container;
pub mod health;
pub mod mount;
pub mod port;
pub mod response;
pub mod status;
pub mod translate;
