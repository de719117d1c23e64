mod charges;

pub use charges::Charges;
