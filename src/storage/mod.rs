pub mod read_colour_table;
pub mod read_config;
