pub mod site;

pub use site::write_site;
