pub mod authorities;
pub mod bbox;
pub mod find;
pub mod root;
pub mod surfaces;
pub mod weather;
