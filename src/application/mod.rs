pub mod aggregate_regions;
