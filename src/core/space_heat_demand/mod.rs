pub mod annual_load;
