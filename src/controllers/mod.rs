pub mod interactive;
pub mod startup;
