//! Small helpers shared by the service layer.

pub mod db;
pub mod password;
pub mod validate;
