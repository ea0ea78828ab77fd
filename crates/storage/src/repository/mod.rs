pub mod athlete;
